//! Categorized word bank and helpers for generating randomized stimulus sequences
//!
//! The bank is assembled once per process from fixed category lists and is
//! read-only afterward; every generation call works on its own shuffled copy.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Emotions and feelings
const EMOTIONS_POSITIVE: &[&str] = &[
    "joy", "love", "peace", "hope", "pride", "gratitude", "relief", "amusement", "excitement",
    "curiosity", "affection", "comfort", "serenity", "delight", "gladness", "satisfaction",
    "optimism", "confidence", "trust", "admiration", "awe", "inspiration", "enthusiasm", "calm",
    "kindness", "compassion", "empathy", "tenderness", "forgiveness", "warmth", "harmony",
    "belonging", "security", "safety", "freedom", "wonder", "interest", "playfulness", "cheer",
    "contentment",
];

const EMOTIONS_NEGATIVE: &[&str] = &[
    "anger", "fear", "sadness", "shame", "guilt", "envy", "jealousy", "disgust", "anxiety",
    "worry", "stress", "loneliness", "grief", "regret", "frustration", "boredom", "resentment",
    "bitterness", "exhaustion", "doubt", "insecurity", "embarrassment", "panic", "dread", "hurt",
    "rejection", "isolation", "rage", "impatience", "irritation", "apathy", "despair",
    "hopelessness", "homesickness", "nostalgia", "melancholy", "skepticism", "cynicism", "alarm",
    "suspicion",
];

/// Personality traits and values
const TRAITS_VALUES: &[&str] = &[
    "honesty", "loyalty", "courage", "humility", "ambition", "creativity", "discipline",
    "patience", "generosity", "integrity", "fairness", "justice", "curiosity", "leadership",
    "resilience", "perseverance", "open-mindedness", "spontaneity", "prudence", "adaptability",
    "authenticity", "diligence", "focus", "kindness", "reliability", "wit", "humor",
    "self-reliance", "independence", "cooperation", "altruism", "respect", "tolerance", "grit",
    "balance", "moderation", "assertiveness", "confidence", "mindfulness", "flexibility",
];

/// People and social
const SOCIAL: &[&str] = &[
    "family", "friend", "stranger", "ally", "rival", "leader", "follower", "team", "community",
    "crowd", "mentor", "student", "teacher", "parent", "child", "sibling", "partner", "neighbor",
    "colleague", "customer", "audience", "fan", "critic", "supporter", "volunteer", "host",
    "guest", "winner", "loser", "peacemaker",
];

/// Nature, animals, and places
const NATURE: &[&str] = &[
    "forest", "ocean", "mountain", "river", "desert", "valley", "island", "meadow", "waterfall",
    "canyon", "prairie", "tundra", "reef", "glacier", "volcano", "savanna", "swamp", "lagoon",
    "grove", "cliff", "beach", "shore", "dune", "cave", "cove", "rainforest", "marsh", "bay",
    "delta", "peak",
];

const ANIMALS: &[&str] = &[
    "lion", "tiger", "bear", "eagle", "wolf", "fox", "owl", "dolphin", "whale", "shark",
    "elephant", "giraffe", "zebra", "rhino", "hippo", "panther", "leopard", "cheetah", "buffalo",
    "antelope", "penguin", "seal", "otter", "koala", "kangaroo", "panda", "camel", "horse", "dog",
    "cat", "sparrow", "hawk", "falcon", "swan", "goose", "duck", "rabbit", "mouse", "squirrel",
    "deer",
];

const PLACES: &[&str] = &[
    "home", "school", "office", "market", "hospital", "airport", "station", "library", "museum",
    "park", "theater", "stadium", "cafe", "restaurant", "hotel", "factory", "farm", "church",
    "temple", "mosque", "city", "village", "suburb", "downtown", "harbor", "port", "bridge",
    "tunnel", "tower", "plaza",
];

/// Objects and technology
const OBJECTS: &[&str] = &[
    "book", "chair", "table", "lamp", "mirror", "clock", "door", "window", "phone", "laptop",
    "keyboard", "mouse", "camera", "bottle", "glass", "cup", "plate", "spoon", "fork", "knife",
    "backpack", "wallet", "watch", "pen", "pencil", "notebook", "guitar", "piano", "violin",
    "drum", "bicycle", "car", "bus", "train", "rocket", "ship", "subway", "skateboard", "helmet",
    "umbrella",
];

const TECHNOLOGY: &[&str] = &[
    "internet", "network", "server", "database", "algorithm", "password", "encryption", "robot",
    "satellite", "sensor", "software", "hardware", "cloud", "blockchain", "drone", "quantum",
    "virtual", "augmented", "battery", "solar", "wireless", "signal", "protocol", "browser",
    "search", "engine", "api", "compiler", "debugger", "stream",
];

/// Abstract concepts
const ABSTRACT_CONCEPTS: &[&str] = &[
    "time", "memory", "identity", "freedom", "destiny", "choice", "fate", "truth", "beauty",
    "power", "knowledge", "wisdom", "belief", "doubt", "chaos", "order", "silence", "noise",
    "balance", "change", "growth", "decay", "mortality", "legacy", "purpose", "meaning", "luck",
    "risk", "opportunity", "threat",
];

/// Activities and work
const ACTIONS: &[&str] = &[
    "run", "walk", "jump", "swim", "climb", "read", "write", "sing", "dance", "laugh", "cry",
    "think", "plan", "build", "design", "paint", "cook", "bake", "drive", "code", "study",
    "teach", "learn", "train", "compete", "rest", "meditate", "negotiate", "lead", "follow",
];

const WORK_STUDY: &[&str] = &[
    "project", "deadline", "meeting", "presentation", "research", "experiment", "report",
    "thesis", "exam", "assignment", "internship", "promotion", "salary", "budget", "contract",
    "startup", "career", "apprentice", "schedule", "feedback",
];

/// Daily life and culture
const FOOD: &[&str] = &[
    "bread", "rice", "pasta", "soup", "salad", "pizza", "burger", "sushi", "taco", "noodle",
    "apple", "banana", "orange", "grape", "strawberry", "blueberry", "mango", "pineapple",
    "peach", "pear", "carrot", "tomato", "potato", "onion", "garlic", "pepper", "cheese",
    "yogurt", "butter", "chocolate",
];

const ARTS_SPORTS: &[&str] = &[
    "painting", "sculpture", "poetry", "novel", "cinema", "theater", "music", "opera", "ballet",
    "jazz", "soccer", "basketball", "tennis", "baseball", "golf", "boxing", "swimming",
    "cycling", "running", "yoga",
];

const HEALTH_BODY: &[&str] = &[
    "sleep", "diet", "exercise", "energy", "breath", "heart", "mind", "body", "muscle", "bone",
    "immune", "therapy", "medicine", "injury", "recovery", "strength", "posture", "balance",
    "focus", "habit",
];

const WEATHER_TIME: &[&str] = &[
    "sun", "moon", "star", "cloud", "rain", "storm", "thunder", "lightning", "snow", "fog",
    "spring", "summer", "autumn", "winter", "dawn", "dusk", "midnight", "noon", "yesterday",
    "tomorrow",
];

const MONEY_POLITICS: &[&str] = &[
    "money", "debt", "tax", "trade", "market", "investment", "inflation", "recession", "policy",
    "law", "vote", "election", "freedom", "rights", "duty", "power", "authority", "justice",
    "order", "reform",
];

const TRAVEL: &[&str] = &[
    "journey", "adventure", "map", "compass", "ticket", "passport", "luggage", "hotel", "tour",
    "guide", "bridge", "road", "highway", "tunnel", "harbor", "port", "island", "border",
    "customs", "visa",
];

/// All semantic categories in their fixed interleaving order
pub const CATEGORIES: &[&[&str]] = &[
    EMOTIONS_POSITIVE,
    EMOTIONS_NEGATIVE,
    TRAITS_VALUES,
    SOCIAL,
    NATURE,
    ANIMALS,
    PLACES,
    OBJECTS,
    TECHNOLOGY,
    ABSTRACT_CONCEPTS,
    ACTIONS,
    WORK_STUDY,
    FOOD,
    ARTS_SPORTS,
    HEALTH_BODY,
    WEATHER_TIME,
    MONEY_POLITICS,
    TRAVEL,
];

/// The aggregated, deduplicated vocabulary. Words appearing in more than one
/// category collapse to a single entry; first-seen order is kept so the bank
/// is stable for the process lifetime.
pub static WORD_BANK: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut seen = HashSet::new();
    let mut bank = Vec::new();
    for category in CATEGORIES {
        for &word in *category {
            if seen.insert(word) {
                bank.push(word);
            }
        }
    }
    bank
});

/// Returns a randomized sequence of unique words of the requested length.
///
/// `count` is clamped to `[1, bank size]`; out-of-range requests are never an
/// error. The bank itself is untouched, only a private copy is shuffled.
pub fn random_words(count: usize) -> Vec<&'static str> {
    let safe_count = count.clamp(1, WORD_BANK.len());
    let mut copy = WORD_BANK.clone();
    copy.shuffle(&mut rand::thread_rng());
    copy.truncate(safe_count);
    copy
}

/// Returns a sequence with category diversity by interleaving the groups.
///
/// Each category pool is shuffled independently, then one word is taken from
/// each category in cyclic order, skipping exhausted pools. Mixing domains
/// this way reduces priming effects in the association game. Cross-category
/// duplicates are emitted at most once, so the result is pairwise distinct.
pub fn interleaved_words(count: usize) -> Vec<&'static str> {
    let mut rng = rand::thread_rng();
    let mut pools: Vec<Vec<&'static str>> = CATEGORIES.iter().map(|c| c.to_vec()).collect();
    for pool in &mut pools {
        pool.shuffle(&mut rng);
    }

    let target = count.min(WORD_BANK.len());
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(target);
    let mut idx = 0usize;
    while result.len() < target {
        if pools.iter().all(|p| p.is_empty()) {
            break;
        }
        let slot = idx % pools.len();
        let pool = &mut pools[slot];
        // Keep drawing until this category yields a fresh word or runs dry,
        // so every non-exhausted category contributes once per lap
        while let Some(word) = pool.pop() {
            if seen.insert(word) {
                result.push(word);
                break;
            }
        }
        idx += 1;
    }
    result
}
