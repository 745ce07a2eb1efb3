use crate::io::record::Record;
use crate::prelude::*;
use log::{debug, trace};

/// Counts tableau events, logging each one as it happens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub enqueued_branches: usize,
    pub closed_branches: usize,
    pub open_branches: usize,
    pub abandoned_branches: usize,
    pub alpha_expansions: usize,
    pub beta_expansions: usize,
    pub delta_expansions: usize,
    pub gamma_expansions: usize,
}

impl Statistics {
    pub fn statistics(&self) -> [(&'static str, usize); 8] {
        [
            ("enqueued branches", self.enqueued_branches),
            ("closed branches", self.closed_branches),
            ("open branches", self.open_branches),
            ("abandoned branches", self.abandoned_branches),
            ("alpha expansions", self.alpha_expansions),
            ("beta expansions", self.beta_expansions),
            ("delta expansions", self.delta_expansions),
            ("gamma expansions", self.gamma_expansions),
        ]
    }

    pub fn report(&self) {
        for (name, value) in self.statistics().iter() {
            println!("% {}: {}", name, value);
        }
    }
}

impl Record for Statistics {
    fn enqueued(&mut self, branch: &Branch) {
        self.enqueued_branches += 1;
        trace!("enqueue {}", branch);
    }

    fn alpha(&mut self, expanded: &Formula, added: &[Formula]) {
        self.alpha_expansions += 1;
        let added: Vec<String> = added.iter().map(|f| f.to_string()).collect();
        debug!("alpha {} => {}", expanded, added.join(", "));
    }

    fn beta(&mut self, expanded: &Formula, left: &Formula, right: &Formula) {
        self.beta_expansions += 1;
        debug!("beta {} => {} | {}", expanded, left, right);
    }

    fn delta(&mut self, expanded: &Formula, instance: &Formula, witness: Term) {
        self.delta_expansions += 1;
        debug!("delta {} => {} (witness {})", expanded, instance, witness);
    }

    fn gamma(&mut self, universal: &Formula, instance: &Formula, term: Term) {
        self.gamma_expansions += 1;
        debug!("gamma {} => {} (term {})", universal, instance, term);
    }

    fn closed(&mut self, branch: &Branch) {
        self.closed_branches += 1;
        debug!("closed {}", branch);
    }

    fn open(&mut self, branch: &Branch) {
        self.open_branches += 1;
        debug!("open {}", branch);
    }

    fn abandoned(&mut self, branch: &Branch, formula: &Formula) {
        self.abandoned_branches += 1;
        debug!("abandoned {} at {}", branch, formula);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tableau::{starting_branch_from_text, Tableau};

    fn run(text: &str) -> (Satisfiability, Statistics) {
        let mut statistics = Statistics::default();
        let branch = starting_branch_from_text(text).unwrap();
        let verdict = Tableau::default().run(branch, &mut statistics);
        (verdict, statistics)
    }

    #[test]
    fn counts_a_closing_search() {
        let (verdict, statistics) = run("((p\\/q)/\\(~p/\\~q))");
        assert_eq!(verdict, Satisfiability::Unsatisfiable);
        assert_eq!(statistics.alpha_expansions, 3);
        assert_eq!(statistics.beta_expansions, 1);
        assert_eq!(statistics.closed_branches, 2);
        assert_eq!(statistics.open_branches, 0);
        assert_eq!(statistics.enqueued_branches, 6);
    }

    #[test]
    fn counts_an_open_search() {
        let (verdict, statistics) = run("(p\\/q)");
        assert_eq!(verdict, Satisfiability::Satisfiable);
        assert_eq!(statistics.beta_expansions, 1);
        assert_eq!(statistics.open_branches, 1);
        assert_eq!(statistics.closed_branches, 0);
    }

    #[test]
    fn counts_quantifier_steps() {
        let (verdict, statistics) = run("(ExP(x,x)/\\Ax~P(x,x))");
        assert_eq!(verdict, Satisfiability::Unsatisfiable);
        assert_eq!(statistics.delta_expansions, 1);
        assert_eq!(statistics.gamma_expansions, 1);
        assert_eq!(statistics.statistics()[1], ("closed branches", 1));
    }
}
