use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Proposition {
    P,
    Q,
    R,
    S,
}

impl Proposition {
    pub const ALL: [Proposition; 4] = [Self::P, Self::Q, Self::R, Self::S];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(Self::P),
            'q' => Some(Self::Q),
            'r' => Some(Self::R),
            's' => Some(Self::S),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::P => 'p',
            Self::Q => 'q',
            Self::R => 'r',
            Self::S => 's',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Predicate {
    P,
    Q,
    R,
    S,
}

impl Predicate {
    pub const ALL: [Predicate; 4] = [Self::P, Self::Q, Self::R, Self::S];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'P' => Some(Self::P),
            'Q' => Some(Self::Q),
            'R' => Some(Self::R),
            'S' => Some(Self::S),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::P => 'P',
            Self::Q => 'Q',
            Self::R => 'R',
            Self::S => 'S',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    X,
    Y,
    Z,
    W,
}

impl Variable {
    pub const ALL: [Variable; 4] = [Self::X, Self::Y, Self::Z, Self::W];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'z' => Some(Self::Z),
            'w' => Some(Self::W),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::W => 'w',
        }
    }
}

/// An argument position of an atom.
///
/// Recognized text only ever contains variables. A branch turns free
/// variables into rigid names, and constants are minted by the tableau
/// when it instantiates quantifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    Variable(Variable),
    Name(Variable),
    Constant(u32),
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Variable(x) | Term::Name(x) => write!(f, "{}", x),
            Term::Constant(n) => write!(f, "c{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_disjoint() {
        for c in "pqrsPQRSxyzw".chars() {
            let hits = [
                Proposition::from_char(c).is_some(),
                Predicate::from_char(c).is_some(),
                Variable::from_char(c).is_some(),
            ];
            assert_eq!(hits.iter().filter(|hit| **hit).count(), 1);
        }
    }

    #[test]
    fn symbols_render_as_their_letter() {
        for p in Proposition::ALL.iter() {
            assert_eq!(Proposition::from_char(p.as_char()), Some(*p));
        }
        for v in Variable::ALL.iter() {
            assert_eq!(format!("{}", Term::Variable(*v)), v.to_string());
        }
        assert_eq!(format!("{}", Term::Name(Variable::Z)), "z");
        assert_eq!(format!("{}", Term::Constant(3)), "c3");
        assert_eq!(Predicate::from_char('E'), None);
        assert_eq!(Variable::from_char('A'), None);
    }
}
