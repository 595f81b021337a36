/// Attribute endpoints each model exposes, in menu order.
pub fn for_model(model: &str) -> &'static [&'static str] {
    match model {
        "lda" => &[
            "Vocab",
            "DocList",
            "TermList",
            "TopicList",
            "TermTopicMatrix",
            "DocTopicMatrix",
            "TopicCovariance",
            "TopTerms",
            "TopDocs",
        ],
        "itm" => &["Update", "gib"],
        "corpus" => &[
            "DocumentByIndex",
            "DocumentById",
            "SearchDocuments",
            "Metadata",
            "TermFreqs",
            "TermProbs",
            "TermCoFreqs",
            "TermCoProbs",
            "TermG2",
            "SentenceCoFreqs",
            "SentenceCoProbs",
            "SentenceG2",
        ],
        _ => &[],
    }
}
