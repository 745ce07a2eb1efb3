use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;
use tabsat::TableauConfig;

const NAME: &str = "tabsat";

const ABOUT: &str = "
tabsat classifies formulae of a small propositional and first-order
language and decides their satisfiability with a semantic tableau.
The first line of the input selects reports: PARSE, SAT, or both.
Each following line holds one formula.
";

#[derive(StructOpt)]
#[structopt(name = NAME, about = ABOUT)]
pub(crate) struct Options {
    #[structopt(
        parse(from_os_str),
        help = "path to input file, stdin if omitted"
    )]
    pub(crate) path: Option<PathBuf>,

    #[structopt(long, help = "report syntactic categories")]
    pub(crate) parse: bool,

    #[structopt(long, help = "report satisfiability")]
    pub(crate) sat: bool,

    #[structopt(
        long,
        help = "constants a branch may introduce",
        default_value = "10"
    )]
    pub(crate) max_constants: u32,

    #[structopt(long, help = "log every tableau step")]
    pub(crate) trace: bool,

    #[structopt(long, help = "print search statistics")]
    pub(crate) statistics: bool,
}

impl Options {
    pub(crate) fn parse() -> Self {
        Self::from_args()
    }

    pub(crate) fn log_level(&self) -> LevelFilter {
        if self.trace {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub(crate) fn tableau_config(&self) -> TableauConfig {
        let max_constants = self.max_constants;
        TableauConfig { max_constants }
    }
}
