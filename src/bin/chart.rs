use blackjack_strategy::{recommended_action, Action, Complexity, RuleOptions, Surrender};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "chart",
    about = "Print CSV strategy charts for a blackjack rule configuration"
)]
struct Args {
    /// Number of decks
    #[arg(long, default_value = "6")]
    num_decks: u8,

    /// Dealer hits soft 17
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    hit_soft_17: bool,

    /// Strategy complexity: basic, easy, simple, advanced, exactComposition,
    /// bjc-supereasy, bjc-simple, bjc-great
    #[arg(long, default_value = "advanced")]
    complexity: String,
}

fn result_letter(action: Action) -> char {
    match action {
        Action::Surrender => 'R',
        Action::Split => 'P',
        Action::Stand => 'S',
        Action::Hit => 'H',
        Action::Double => 'D',
        _ => 'N',
    }
}

/// One chart row: cells for dealer 2 through ace. Double and surrender
/// cells carry a qualifier letter showing the fallback action when the
/// primary play is unavailable; splits carry one when the recommendation
/// depends on doubling after the split.
fn chart_row(player_cards: &[u8], options: &RuleOptions) -> String {
    let mut line = String::new();

    // Most liberal double and surrender rules, qualified below
    let mut liberal = options.clone();
    liberal.double_range = Some((1, 21));
    liberal.surrender = Some(Surrender::Late);
    liberal.double_after_split = Some(true);

    for column in 2..=11u8 {
        let dealer_card = if column == 11 { 1 } else { column };
        let result = evaluate(player_cards, dealer_card, &liberal);
        line.push(result_letter(result));

        if result == Action::Double || result == Action::Surrender {
            let mut restricted = liberal.clone();
            restricted.double_range = Some((0, 0));
            restricted.surrender = Some(Surrender::None);
            line.push(result_letter(evaluate(player_cards, dealer_card, &restricted)));
        } else if result == Action::Split {
            let mut no_das = liberal.clone();
            no_das.double_after_split = Some(false);
            let fallback = evaluate(player_cards, dealer_card, &no_das);
            if fallback != Action::Split {
                line.push(result_letter(fallback));
            }
        }

        if column < 11 {
            line.push(',');
        }
    }

    line
}

fn evaluate(player_cards: &[u8], dealer_card: u8, options: &RuleOptions) -> Action {
    recommended_action(player_cards, dealer_card, 1, true, Some(options)).unwrap_or_else(|err| {
        eprintln!("Chart evaluation failed: {err}");
        std::process::exit(1);
    })
}

fn print_chart(options: &RuleOptions) {
    println!(
        "{} deck(s), Dealer {} on soft 17 - {} complexity",
        options.number_of_decks.unwrap_or(6),
        if options.hit_soft17.unwrap_or(true) {
            "Hits"
        } else {
            "Stands"
        },
        options
            .strategy_complexity
            .map(|c| serde_variant_name(c))
            .unwrap_or("basic"),
    );

    // Hard totals 8-17; build them pair-free so the split logic stays out
    println!(" ,2,3,4,5,6,7,8,9,10,A");
    for total in 8..=17u8 {
        let cards = if total < 12 {
            [2, total - 2]
        } else {
            [10, total - 10]
        };
        println!("{},{}", total, chart_row(&cards, options));
    }

    // Soft totals 13-20
    println!(" ,2,3,4,5,6,7,8,9,10,A");
    for total in 13..=20u8 {
        let cards = [1, total - 11];
        println!("{},{}", total, chart_row(&cards, options));
    }

    // Pairs, aces last
    println!(" ,2,3,4,5,6,7,8,9,10,A");
    for rank in 2..=10u8 {
        println!("{} pair,{}", rank, chart_row(&[rank, rank], options));
    }
    println!("A pair,{}", chart_row(&[1, 1], options));
}

fn serde_variant_name(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Basic => "basic",
        Complexity::Easy => "easy",
        Complexity::Simple => "simple",
        Complexity::Advanced => "advanced",
        Complexity::ExactComposition => "exactComposition",
        Complexity::BjcSuperEasy => "bjc-supereasy",
        Complexity::BjcSimple => "bjc-simple",
        Complexity::BjcGreat => "bjc-great",
    }
}

fn main() {
    let args = Args::parse();

    let complexity: Complexity = args.complexity.parse().unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(1);
    });

    let options = RuleOptions {
        number_of_decks: Some(args.num_decks),
        hit_soft17: Some(args.hit_soft_17),
        strategy_complexity: Some(complexity),
        ..Default::default()
    };

    print_chart(&options);
}
