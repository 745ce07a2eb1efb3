use crate::prelude::*;

/// Observer for tableau events. Every hook defaults to doing nothing.
pub trait Record {
    fn enqueued(&mut self, _branch: &Branch) {}

    fn alpha(&mut self, _expanded: &Formula, _added: &[Formula]) {}

    fn beta(
        &mut self,
        _expanded: &Formula,
        _left: &Formula,
        _right: &Formula,
    ) {
    }

    fn delta(
        &mut self,
        _expanded: &Formula,
        _instance: &Formula,
        _witness: Term,
    ) {
    }

    fn gamma(
        &mut self,
        _universal: &Formula,
        _instance: &Formula,
        _term: Term,
    ) {
    }

    fn closed(&mut self, _branch: &Branch) {}

    fn open(&mut self, _branch: &Branch) {}

    fn abandoned(&mut self, _branch: &Branch, _formula: &Formula) {}
}

pub struct Silent;
impl Record for Silent {}
