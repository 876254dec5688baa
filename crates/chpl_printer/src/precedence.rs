//! Operator precedence and parenthesization.
//!
//! Precedence follows Chapel's operator table; higher numbers bind
//! tighter. Constructs that have a precedence but are not operator calls
//! in the uAST (`new`, `reduce`, `scan`, `..`, `by`, `align`) never reach
//! this module.

/// An operator as it occurs in an `OpCall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator<'s> {
    /// Surface spelling, `!` for both prefix and postfix bang.
    pub symbol: &'s str,
    pub unary: bool,
    pub postfix: bool,
}

impl<'s> Operator<'s> {
    /// Describe the operator named `op` applied to `arity` actuals.
    ///
    /// The parser names postfix bang `postfix!`; unary `?` is always postfix.
    pub fn of(op: &'s str, arity: usize) -> Self {
        if arity != 1 {
            return Operator {
                symbol: op,
                unary: false,
                postfix: false,
            };
        }
        match op {
            "postfix!" => Operator {
                symbol: "!",
                unary: true,
                postfix: true,
            },
            "?" => Operator {
                symbol: "?",
                unary: true,
                postfix: true,
            },
            _ => Operator {
                symbol: op,
                unary: true,
                postfix: false,
            },
        }
    }

    pub fn precedence(&self) -> Option<u8> {
        precedence_of(self.symbol, self.unary, self.postfix)
    }
}

/// Precedence of `op`, or `None` for an operator outside the table.
///
/// `unary` separates prefix `+`/`-` from the binary forms, `postfix`
/// separates postfix `!` from prefix `!`.
pub fn precedence_of(op: &str, unary: bool, postfix: bool) -> Option<u8> {
    let prec = match op {
        "?" | "!" if postfix => 18,
        ":" => 17,
        "**" => 16,
        "!" | "~" => 14,
        "*" | "/" | "%" => 13,
        "+" | "-" if unary => 12,
        "<<" | ">>" => 11,
        "&" => 10,
        "^" => 9,
        "|" => 8,
        "+" | "-" => 7,
        "<" | "<=" | ">" | ">=" => 5,
        "==" | "!=" => 4,
        "&&" => 3,
        "||" => 2,
        "#" => 1,
        _ => return None,
    };
    Some(prec)
}

/// Whether the operand `inner` of the operator expression `outer` must be
/// parenthesized to keep the tree's grouping.
///
/// `inner_is_rhs` is true when `inner` is the right operand of a binary
/// `outer`, or the operand of a prefix unary `outer`.
pub fn needs_parens(
    outer: &str,
    inner: &str,
    outer_unary: bool,
    outer_postfix: bool,
    inner_unary: bool,
    inner_postfix: bool,
    inner_is_rhs: bool,
) -> bool {
    let (Some(outer_prec), Some(inner_prec)) = (
        precedence_of(outer, outer_unary, outer_postfix),
        precedence_of(inner, inner_unary, inner_postfix),
    ) else {
        return true;
    };

    // 1 ** -2, never 1 ** (-2)
    if inner_unary && inner_is_rhs {
        return false;
    }
    if outer_prec > inner_prec {
        return true;
    }
    if outer_prec < inner_prec {
        return false;
    }

    // a - (b - c), a / (b * c), (a == b) == c on the right
    if inner_is_rhs && matches!(outer, "-" | "/" | "%" | "<<" | ">>" | "==" | "!=") {
        return true;
    }
    // ** is right-associative: (a ** b) ** c
    if !inner_is_rhs && outer == "**" {
        return true;
    }
    false
}

/// Whether a binary operator is written with a space on each side.
pub fn want_spaces(op: &str, printing_type: bool) -> bool {
    op != "**" && !printing_type
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("?", true, true, Some(18))]
    #[case("!", true, true, Some(18))]
    #[case(":", false, false, Some(17))]
    #[case("**", false, false, Some(16))]
    #[case("!", true, false, Some(14))]
    #[case("~", true, false, Some(14))]
    #[case("%", false, false, Some(13))]
    #[case("-", true, false, Some(12))]
    #[case("+", true, false, Some(12))]
    #[case(">>", false, false, Some(11))]
    #[case("&", false, false, Some(10))]
    #[case("^", false, false, Some(9))]
    #[case("|", false, false, Some(8))]
    #[case("-", false, false, Some(7))]
    #[case("<=", false, false, Some(5))]
    #[case("!=", false, false, Some(4))]
    #[case("&&", false, false, Some(3))]
    #[case("||", false, false, Some(2))]
    #[case("#", false, false, Some(1))]
    #[case("=", false, false, None)]
    #[case("+=", false, false, None)]
    #[case("?", true, false, None)]
    fn test_precedence_table(
        #[case] op: &str,
        #[case] unary: bool,
        #[case] postfix: bool,
        #[case] expected: Option<u8>,
    ) {
        assert_eq!(precedence_of(op, unary, postfix), expected);
    }

    #[rstest]
    // a - (b - c)
    #[case("-", "-", false, false, false, false, true, true)]
    // a + (b - c) prints as a + b - c
    #[case("+", "-", false, false, false, false, true, false)]
    // (a ** b) ** c
    #[case("**", "**", false, false, false, false, false, true)]
    // a ** (b ** c) prints as a ** b ** c
    #[case("**", "**", false, false, false, false, true, false)]
    // 1 ** -2
    #[case("**", "-", false, false, true, false, true, false)]
    // (-1) ** 2
    #[case("**", "-", false, false, true, false, false, true)]
    // (a - b) - c prints as a - b - c
    #[case("-", "-", false, false, false, false, false, false)]
    // (a + b) * c
    #[case("*", "+", false, false, false, false, false, true)]
    // a * b + c
    #[case("+", "*", false, false, false, false, false, false)]
    // a / (b * c)
    #[case("/", "*", false, false, false, false, true, true)]
    // a * (b / c) prints as a * b / c
    #[case("*", "/", false, false, false, false, true, false)]
    // a == (b == c)
    #[case("==", "==", false, false, false, false, true, true)]
    // a < b < c on the left
    #[case("<", "<", false, false, false, false, false, false)]
    // (a + b)!
    #[case("postfix!", "+", true, true, false, false, false, true)]
    // x = a + b, assignment is not in the table
    #[case("=", "+", false, false, false, false, true, true)]
    // !(a && b)
    #[case("!", "&&", true, false, false, false, true, true)]
    fn test_needs_parens(
        #[case] outer: &str,
        #[case] inner: &str,
        #[case] outer_unary: bool,
        #[case] outer_postfix: bool,
        #[case] inner_unary: bool,
        #[case] inner_postfix: bool,
        #[case] inner_is_rhs: bool,
        #[case] expected: bool,
    ) {
        let outer = if outer == "postfix!" { "!" } else { outer };
        assert_eq!(
            needs_parens(outer, inner, outer_unary, outer_postfix, inner_unary, inner_postfix, inner_is_rhs),
            expected
        );
    }

    #[test]
    fn test_every_pair_in_both_positions() {
        let binary = [
            ":", "**", "*", "/", "%", "<<", ">>", "&", "^", "|", "+", "-", "<", "<=", ">", ">=", "==",
            "!=", "&&", "||", "#",
        ];
        for outer in binary {
            for inner in binary {
                let outer_prec = precedence_of(outer, false, false).unwrap_or_default();
                let inner_prec = precedence_of(inner, false, false).unwrap_or_default();
                for rhs in [false, true] {
                    let got = needs_parens(outer, inner, false, false, false, false, rhs);
                    let expected = outer_prec > inner_prec
                        || (outer_prec == inner_prec
                            && ((rhs && ["-", "/", "%", "<<", ">>", "==", "!="].contains(&outer))
                                || (!rhs && outer == "**")));
                    assert_eq!(got, expected, "outer {outer} inner {inner} rhs {rhs}");
                }
            }
        }
    }

    #[test]
    fn test_relational_compared_by_value() {
        let lt = String::from("<");
        let eq = String::from("==");
        assert_eq!(precedence_of(&lt, false, false), Some(5));
        assert_eq!(precedence_of(&eq, false, false), Some(4));
        assert!(!needs_parens(&eq, &lt, false, false, false, false, true));
    }

    #[test]
    fn test_operator_descriptor() {
        let bang = Operator::of("postfix!", 1);
        assert_eq!(bang.symbol, "!");
        assert!(bang.postfix);
        assert_eq!(bang.precedence(), Some(18));

        let nilable = Operator::of("?", 1);
        assert!(nilable.postfix);

        let neg = Operator::of("-", 1);
        assert!(neg.unary && !neg.postfix);
        assert_eq!(neg.precedence(), Some(12));

        let minus = Operator::of("-", 2);
        assert!(!minus.unary);
        assert_eq!(minus.precedence(), Some(7));
    }

    #[test]
    fn test_want_spaces() {
        assert!(want_spaces("+", false));
        assert!(!want_spaces("**", false));
        assert!(!want_spaces("*", true));
    }
}
