use crate::AppState;
use knowledge_base::KnowledgeBase;
use resolver::DocumentCache;
use std::sync::Arc;

pub const SAMPLE_INSIGHTS: &str = r#"{
    "np.random.shuffle": {
        "description": "Modify a sequence in-place by shuffling its contents.",
        "behavioralNotes": ["Returns None."]
    },
    "np.random.permutation": {
        "description": "Randomly permute a sequence."
    },
    "ndarray.reshape": {
        "qualifiedName": "numpy.ndarray.reshape",
        "description": "Gives a new shape to an array without changing its data."
    }
}"#;

/// App state over a small in-memory knowledge base and an empty document cache.
pub fn sample_state() -> AppState {
    let knowledge_base = KnowledgeBase::from_json_str(SAMPLE_INSIGHTS).unwrap();
    AppState::new(knowledge_base, Arc::new(DocumentCache::new()))
}
