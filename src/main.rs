mod options;

use log::debug;
use options::Options;
use tabsat::io::log::start_logging;
use tabsat::io::{exit, input, report};
use tabsat::statistics::Statistics;
use tabsat::{parse, starting_branch, Tableau};

fn main() {
    let options = Options::parse();
    start_logging(options.log_level());

    let text = input::read_input(options.path.as_deref())
        .unwrap_or_else(|err| exit::input_error(&err));
    let (mode, lines) = input::split_input(&text);
    let mode = mode.force(options.parse, options.sat);
    debug!("mode {:?}", mode);

    let mut tableau = Tableau::new(options.tableau_config());
    for line in lines {
        if mode.parse {
            println!("{}", report::parse_sentence(line));
        }
        if mode.sat {
            let verdict = parse(line).map(|formula| {
                let mut statistics = Statistics::default();
                let branch = starting_branch(formula);
                let verdict = tableau.run(branch, &mut statistics);
                if options.statistics {
                    statistics.report();
                }
                verdict
            });
            println!("{}", report::sat_sentence(line, verdict));
        }
    }
    exit::success()
}
