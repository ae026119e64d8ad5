//! Demo binary: filters the bundled sample listings from the command line.
//!
//! ```text
//! dealflow [deals|contacts] [--search TERM] [--sort KEY] [--min M] [--max M]
//! ```

use dealflow::catalog::{ListView, SortKey};
use dealflow::domain::{sample_contacts, sample_deals, Result};
use dealflow::observability::init_tracing;

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let listing = args.next().unwrap_or_else(|| "deals".to_string());

    let mut search = String::new();
    let mut sort = None;
    let mut min = None;
    let mut max = None;

    while let Some(flag) = args.next() {
        let value = args.next().unwrap_or_default();
        match flag.as_str() {
            "--search" => search = value,
            "--sort" => sort = SortKey::parse(&value),
            "--min" => min = value.parse().ok(),
            "--max" => max = value.parse().ok(),
            other => {
                eprintln!("unknown flag: {other}");
                std::process::exit(2);
            }
        }
    }

    match listing.as_str() {
        "deals" => {
            let mut view = ListView::new(sample_deals());
            view.set_search(search);
            view.set_sort(sort);
            view.set_size_bounds(min, max);

            println!("{} of {} deals", view.result_count(), view.total_count());
            for deal in view.results() {
                println!(
                    "  {:<32} {:>6}  {:<12} {}",
                    deal.title,
                    deal.deal_size,
                    deal.status.as_str(),
                    deal.location
                );
            }
        }
        "contacts" => {
            let mut view = ListView::new(sample_contacts());
            view.set_search(search);
            view.set_sort(sort);
            view.set_size_bounds(min, max);

            println!(
                "{} of {} contacts",
                view.result_count(),
                view.total_count()
            );
            for contact in view.results() {
                println!(
                    "  {:<32} {:<12} {:<12} {}",
                    contact.entity_name, contact.role, contact.investment_size, contact.region
                );
            }
        }
        other => {
            eprintln!("unknown listing: {other} (expected deals or contacts)");
            std::process::exit(2);
        }
    }

    Ok(())
}
