use review_knn::{
    build_classifier, DefaultTfIdfEngine, Experiment, KnnConfig, Result, Review, TfIdfCosineDistance,
    TfIdfModel,
};
use tracing_subscriber::EnvFilter;

const REVIEWS: &str = r#"{"text": "Terrible service, cold food. Never again.", "stars": 1}
{"text": "Cold food and rude staff, never coming back.", "stars": 1}
{"text": "Rude staff, terrible wait, cold fries.", "stars": 1}
{"text": "Food was okay, service average.", "stars": 3}
{"text": "Average place, okay food, slow service.", "stars": 3}
{"text": "Okay food but the service was slow.", "stars": 3}
{"text": "Amazing food, friendly staff, will return!", "stars": 5}
{"text": "Friendly staff and amazing desserts, will return.", "stars": 5}
{"text": "Amazing food and friendly service, great value.", "stars": 5}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let reviews = REVIEWS
        .lines()
        .map(Review::from_json)
        .collect::<Result<Vec<_>>>()?;

    // word-set Jaccard with the defaults, k clamped to the small training set
    let config = KnnConfig { k: 3, ..KnnConfig::default() };
    let report = Experiment::new(config)?.run(reviews.clone())?;
    println!("word-set jaccard, k = 3\n{report}");

    // the same reviews through TF-IDF cosine distance
    let texts: Vec<&str> = reviews.iter().map(|r| r.text.as_str()).collect();
    let labels: Vec<u8> = reviews.iter().map(|r| r.stars).collect();
    let model = TfIdfModel::<DefaultTfIdfEngine>::fit(&texts)?;
    let classifier = build_classifier(model.vectors(), &labels, 1, TfIdfCosineDistance)?;

    for query in ["the staff were rude and the food cold", "friendly staff, amazing food"] {
        let vector = model.transform(query);
        println!("{query:?} -> {} stars", classifier.classify(&vector)?);
    }
    Ok(())
}
