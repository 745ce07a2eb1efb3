use tabsat::io::record::Silent;
use tabsat::{
    classify, connective_symbol, is_satisfiable, left_operand, parse,
    right_operand, starting_branch, starting_branch_from_text, Category,
    Satisfiability, Tableau, TableauConfig, MAX_CONSTANTS,
};

#[test]
fn classifies_atomic_and_negated_formulas() {
    assert_eq!(classify("p"), Category::Proposition);
    assert_eq!(classify("P(x,y)"), Category::Atom);
    assert_eq!(classify("~p"), Category::PropositionalNegation);
    assert_eq!(classify("~P(x,y)"), Category::FirstOrderNegation);
}

#[test]
fn classifies_quantified_formulas() {
    assert_eq!(classify("ExP(x,y)"), Category::Existential);
    assert_eq!(classify("Ax~P(x,y)"), Category::Universal);
}

#[test]
fn decomposes_binary_formulas() {
    let text = "(p/\\q)";
    assert_eq!(classify(text), Category::PropositionalBinary);
    assert_eq!(left_operand(text), "p");
    assert_eq!(connective_symbol(text), "/\\");
    assert_eq!(right_operand(text), "q");
}

#[test]
fn rejects_mixed_families() {
    assert_eq!(classify("(p/\\P(x,y))"), Category::Invalid);
    assert_eq!(classify("(P(x,y)=>q)"), Category::Invalid);
    assert_eq!(classify("~(p\\/ExP(x,x))"), Category::Invalid);
}

#[test]
fn decides_small_tableaux() {
    let sat = |text| is_satisfiable(starting_branch(parse(text).unwrap()));
    assert_eq!(sat("p"), Satisfiability::Satisfiable);
    assert_eq!(sat("(p/\\~p)"), Satisfiability::Unsatisfiable);
    assert_eq!(sat("(p\\/q)"), Satisfiability::Satisfiable);
    assert_eq!(sat("(p/\\~p)").code(), 0);
    assert_eq!(sat("(p\\/q)").code(), 1);
}

#[test]
fn starting_branch_holds_one_formula() {
    let branch = starting_branch_from_text("(p=>q)").unwrap();
    assert_eq!(branch.len(), 1);
    assert_eq!(branch.formulas()[0].to_string(), "(p=>q)");
    assert!(starting_branch_from_text("").is_err());
}

#[test]
fn config_bounds_witnesses() {
    assert_eq!(TableauConfig::default().max_constants, MAX_CONSTANTS);
    let branch = starting_branch_from_text("AxEyP(x,y)").unwrap();
    let config = TableauConfig { max_constants: 3 };
    let verdict = Tableau::new(config).run(branch, &mut Silent);
    assert_eq!(verdict, Satisfiability::Undetermined);
}

#[test]
fn free_variables_stay_free_under_instantiation() {
    let sat = |text| is_satisfiable(starting_branch_from_text(text).unwrap());
    assert_eq!(
        sat("(AxAy~R(x,y)/\\R(y,z))"),
        Satisfiability::Unsatisfiable
    );
    assert_eq!(
        sat("(AxAw~R(x,w)/\\R(y,z))"),
        Satisfiability::Unsatisfiable
    );
}
