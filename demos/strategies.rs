use strategic_trie::algorithm::Algorithm;
use strategic_trie::node::TrieNode;
use strategic_trie::trie::{ArrayTrie, MapTrie};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=trace shows every operation
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();

    let words = ["dog", "d", "do", "doggie"];

    for algorithm in Algorithm::ALL {
        let mut trie = ArrayTrie::new(algorithm);
        for word in words {
            trie.insert_word(word).expect("lowercase word");
        }
        println!("{algorithm:?} array trie holds {words:?}");

        // Delete from the longest word down, checking who survives each step
        for deleted in ["doggie", "d", "dog", "do"] {
            trie.delete_word(deleted);
            let remaining: Vec<&str> = words
                .iter()
                .copied()
                .filter(|w| trie.contains_word(w))
                .collect();
            println!(
                "  deleted {deleted:?}: remaining {remaining:?}, root empty: {}",
                trie.root().is_empty()
            );
        }
    }

    // Only the map storage can hold characters outside 'a'..='z'
    let mut array = ArrayTrie::default();
    if let Err(e) = array.insert_word("Straße") {
        println!("array trie: {e}");
    }
    let mut map = MapTrie::default();
    map.insert_word("Straße").expect("map nodes accept any char");
    map.set_algorithm(Algorithm::Recursive);
    println!(
        "map trie: contains \"Straße\": {}, prefix \"Stra\": {}",
        map.contains_word("Straße"),
        map.contains_prefix("Stra")
    );
}
