use log::{debug, error, info};

use huffman_codes::{FreqTable, analyze, build_tree, generate_codes};

fn main() {
    env_logger::init();

    info!("--- Start Demo ---");

    let freq: FreqTable<&str> = [
        ("A", 45),
        ("B", 13),
        ("C", 12),
        ("D", 16),
        ("E", 9),
        ("F", 5),
    ]
    .into_iter()
    .collect();

    let tree = build_tree(&freq);
    if let Some(tree) = &tree {
        debug!(
            "Tree built: {} leaves, depth {}",
            tree.leaf_count(),
            tree.depth()
        );
    }
    let codes = generate_codes(tree.as_ref());

    println!("=== Demo: textbook distribution ===");
    for symbol in freq.symbols() {
        if let Some(code) = codes.get(symbol) {
            println!("{} : {}", symbol, code);
        }
    }

    let report = match analyze(&freq, &codes) {
        Ok(report) => report,
        Err(e) => {
            error!("Could not analyze code table: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "\n✅ Weighted length = {}\n\
         🔎 Prefix-free?     {}\n\
         ℹ️ {}",
        report.weighted_length, report.prefix_free, report
    );

    info!("--- End ---");
}
