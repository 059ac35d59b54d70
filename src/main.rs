// src/main.rs

use std::io;

use env_logger::Env;
use log::{error, info, warn};

use gcd_table::config::TableConfig;
use gcd_table::integer_math::count_dictionary::CountDictionary;
use gcd_table::table::GcdTable;

fn main() {
    let config = TableConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration ({}), using defaults", e);
        TableConfig::default()
    });

    // Initialize the logger
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", config.log_level.clone())
        .write_style_or("MY_LOG_STYLE", "always");

    env_logger::Builder::from_env(env).init();

    if config.parallel {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(config.effective_threads())
            .build_global()
        {
            warn!("Failed to configure rayon thread pool: {}", e);
        }
    }

    // Example pairs for the gcd table
    let example_data = [(48, 18), (56, 24), (101, 17), (1001, 7), (5, 25)];

    let table = if config.parallel {
        GcdTable::build_parallel(&example_data)
    } else {
        GcdTable::build(&example_data)
    };

    info!("Built gcd table with {} rows", table.len());
    for row in table.rows() {
        let fact_a = CountDictionary::from_factors(&row.factorization_a);
        let fact_b = CountDictionary::from_factors(&row.factorization_b);
        info!(
            "gcd({}, {}) = {}; {} = {}; {} = {}",
            row.a,
            row.b,
            row.gcd,
            row.a,
            fact_a.format_as_factorization(),
            row.b,
            fact_b.format_as_factorization(),
        );
    }

    if let Err(e) = table.write_csv(io::stdout()) {
        error!("Failed to write csv output: {}", e);
    }
}
