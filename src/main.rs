use scratchcard_analyzer::card::{Card, CardError, load_card_file};
use scratchcard_analyzer::cli::{Cli, parse_cli};
use scratchcard_analyzer::logging;
use scratchcard_analyzer::report::Report;
use scratchcard_analyzer::solver::{constrained_distribution, distribution, score_card};
use scratchcard_analyzer::template::CardTemplate;

fn main() {
    let cli = parse_cli();
    logging::init(cli.verbose);
    if let Err(e) = run(&cli) {
        eprintln!("Failed to analyze card '{}': {e}", cli.card_path);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CardError> {
    let template = CardTemplate::STANDARD;
    let data = load_card_file(&cli.card_path)?;
    let card = Card::from_data(data, &template)?;
    log::debug!(
        "card '{}' validated with {} words",
        cli.card_path,
        card.words.len()
    );

    let score = score_card(&card);
    let histogram = distribution(&card.words, template.bad_letter_count());
    let constrained = cli.constrained.then(|| {
        constrained_distribution(
            &card.words,
            card.double_letter,
            &card.bonus,
            template.bad_letter_count(),
        )
    });

    let report = Report::new(&cli.card_path, &card, score, histogram, constrained);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
