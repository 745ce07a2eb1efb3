use crate::prelude::*;

/// Recognize `text` as a formula, building its tree.
///
/// Rules are tried in a fixed order and the first whose shape matches
/// decides the result: a leading `~` or quantifier prefix commits to that
/// rule even if the remainder is malformed.
pub fn parse(text: &str) -> Option<Formula> {
    if let Some(proposition) = proposition(text) {
        return Some(proposition);
    }
    if let Some(atom) = atom(text) {
        return Some(atom);
    }
    if let Some(rest) = text.strip_prefix('~') {
        return parse(rest).map(Formula::negation);
    }
    if let Some((quantifier, variable, rest)) = quantifier_prefix(text) {
        return parse(rest)
            .filter(|sub| sub.family() == Family::FirstOrder)
            .map(|sub| Formula::quantified(quantifier, variable, sub));
    }
    binary(text)
}

pub fn classify(text: &str) -> Category {
    parse(text).map_or(Category::Invalid, |formula| formula.category())
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_none() {
        Some(c)
    } else {
        None
    }
}

fn proposition(text: &str) -> Option<Formula> {
    let p = Proposition::from_char(single_char(text)?)?;
    Some(Formula::Proposition(p))
}

fn atom(text: &str) -> Option<Formula> {
    let predicate = Predicate::from_char(text.chars().next()?)?;
    let arguments = text[1..].strip_prefix('(')?.strip_suffix(')')?;
    let mut arguments = arguments.split(',');
    let left = Variable::from_char(single_char(arguments.next()?)?)?;
    let right = Variable::from_char(single_char(arguments.next()?)?)?;
    if arguments.next().is_some() {
        return None;
    }
    Some(Formula::atom(predicate, left, right))
}

fn quantifier_prefix(text: &str) -> Option<(Quantifier, Variable, &str)> {
    let mut chars = text.chars();
    let quantifier = Quantifier::from_char(chars.next()?)?;
    let variable = Variable::from_char(chars.next()?)?;
    Some((quantifier, variable, &text[2..]))
}

fn binary(text: &str) -> Option<Formula> {
    let parts = decompose(text)?;
    let left = parse(parts.left)?;
    let right = parse(parts.right)?;
    if left.family() != right.family() {
        return None;
    }
    Some(Formula::binary(parts.connective, left, right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_formulas() {
        assert_eq!(classify("p"), Category::Proposition);
        assert_eq!(classify("s"), Category::Proposition);
        assert_eq!(classify("P(x,y)"), Category::Atom);
        assert_eq!(classify("S(w,w)"), Category::Atom);
        assert_eq!(classify("t"), Category::Invalid);
        assert_eq!(classify("pp"), Category::Invalid);
        assert_eq!(classify("P(x)"), Category::Invalid);
        assert_eq!(classify("P(x,y,z)"), Category::Invalid);
        assert_eq!(classify("P(x, y)"), Category::Invalid);
        assert_eq!(classify("P(a,b)"), Category::Invalid);
        assert_eq!(classify("p(x,y)"), Category::Invalid);
    }

    #[test]
    fn negations_lift_family() {
        assert_eq!(classify("~p"), Category::PropositionalNegation);
        assert_eq!(classify("~~p"), Category::PropositionalNegation);
        assert_eq!(classify("~P(x,y)"), Category::FirstOrderNegation);
        assert_eq!(classify("~AxP(x,y)"), Category::FirstOrderNegation);
        assert_eq!(classify("~"), Category::Invalid);
        assert_eq!(classify("~t"), Category::Invalid);
    }

    #[test]
    fn quantifiers_bind_first_order_only() {
        assert_eq!(classify("ExP(x,y)"), Category::Existential);
        assert_eq!(classify("Ax~P(x,y)"), Category::Universal);
        assert_eq!(classify("AxEyQ(x,y)"), Category::Universal);
        assert_eq!(classify("Exp"), Category::Invalid);
        assert_eq!(classify("Ex(p/\\q)"), Category::Invalid);
        assert_eq!(classify("Ex"), Category::Invalid);
        assert_eq!(classify("EpP(x,y)"), Category::Invalid);
    }

    #[test]
    fn binary_formulas() {
        assert_eq!(classify("(p/\\q)"), Category::PropositionalBinary);
        assert_eq!(classify("(p \\/ ~q)"), Category::PropositionalBinary);
        assert_eq!(classify("((p=>q)/\\r)"), Category::PropositionalBinary);
        assert_eq!(
            classify("(P(x,y)=>ExQ(x,x))"),
            Category::FirstOrderBinary
        );
        assert_eq!(classify("(p/\\P(x,y))"), Category::Invalid);
        assert_eq!(classify("(p)"), Category::Invalid);
        assert_eq!(classify("(p/\\q/\\r)"), Category::Invalid);
        assert_eq!(classify("p/\\q"), Category::Invalid);
    }

    #[test]
    fn degenerate_text() {
        for text in &["", "(", ")", "()", "(/\\)", " p", "p ", "E", "A"] {
            assert_eq!(classify(text), Category::Invalid, "{:?}", text);
        }
    }

    #[test]
    fn parse_builds_tree() {
        let formula = parse("(p=>~q)").unwrap();
        assert_eq!(
            formula,
            Formula::binary(
                Connective::Implies,
                Formula::Proposition(Proposition::P),
                Formula::negation(Formula::Proposition(Proposition::Q)),
            )
        );
        assert_eq!(parse("( p  =>  ~q )"), Some(formula));
    }
}
