use clap::Parser;
use lexica_rs::BiMap;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    #[clap(default_value = "Alpha Beta Gamma Delta")]
    words: String,
    /// Word to look up in both directions.
    #[clap(long, default_value = "beta")]
    lookup: String,
    /// Fail instead of letting later words replace earlier ones.
    #[clap(action, short = 's', default_value = "false")]
    strict: bool,
}

fn main() -> anyhow::Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Args {
        words,
        lookup,
        strict,
    } = Args::parse();

    let pairs = words
        .split_ascii_whitespace()
        .map(|word| (word.to_string(), word.to_lowercase()));
    let index = if strict {
        BiMap::try_from_pairs(pairs)?
    } else {
        BiMap::from_pairs(pairs)
    };

    eprintln!("The index has {} pairs: {}", index.len(), index);
    eprintln!(
        "{lookup:?} as a key maps to {:?}, as a value it is mapped from {:?}",
        index.value_for(lookup.as_str()),
        index.key_for(lookup.as_str())
    );

    let reversed = index.reversed();
    eprintln!("Reversed: {reversed}");
    anyhow::ensure!(
        reversed.reversed().ptr_eq(&index),
        "reversing twice should give back the same index"
    );
    Ok(())
}
