use std::sync::Arc;

use tfidf_recommender::{Recommender, Snapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // weights as an upstream TF-IDF step would hand them over
    let snapshot: Snapshot<f32> = Snapshot::from_parts(
        ["Rust Book", "Cargo Guide", "Tea Atlas", "Baking Basics"],
        ["rust", "cargo", "borrow", "tea", "cake"],
        vec![
            (0, 0, 0.8), (0, 2, 0.6), (0, 1, 0.2),
            (1, 1, 0.9), (1, 0, 0.4),
            (2, 3, 1.0), (2, 4, 0.1),
            (3, 4, 0.9), (3, 3, 0.3),
        ],
    )?;

    let engine = Recommender::new(Arc::new(snapshot));

    println!("Top terms of \"Rust Book\":\n{}", engine.top_terms("Rust Book", 3)?);
    println!("Search \"cargo\":\n{}", engine.search("cargo", 5)?);
    println!("Because you read \"Tea Atlas\": {:?}", engine.recommend_for(&["Tea Atlas"], 2)?);

    match engine.search("python", 5) {
        Err(e) => println!("expected failure: {e}"),
        Ok(hits) => println!("{hits:#?}"),
    }
    Ok(())
}
