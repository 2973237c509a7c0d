//! Hand-authored puzzle templates.

use crate::config::HINTS_PER_PUZZLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub word: &'static str,
    pub keywords: [&'static str; HINTS_PER_PUZZLE],
}

const fn theme(word: &'static str, keywords: [&'static str; HINTS_PER_PUZZLE]) -> Theme {
    Theme { word, keywords }
}

pub const THEMES: [Theme; 25] = [
    theme("RAINBOW", ["rainbow", "sun", "rain", "cloud"]),
    theme("SNOWMAN", ["snowman", "snow", "scarf", "carrot"]),
    theme("JUNGLE", ["monkey", "snake", "parrot", "leaves"]),
    theme("CAMPFIRE", ["fire", "camping", "tree", "night sky"]),
    theme("PIZZA", ["pizza", "cheese", "tomato", "bread"]),
    theme("DESSERT", ["cake", "donut", "ice cream", "candy"]),
    theme("SPORTS", ["soccer", "basketball", "tennis", "trophy"]),
    theme("MUSIC", ["guitar", "drum", "piano", "microphone"]),
    theme("TRAVEL", ["airplane", "train", "car", "map"]),
    theme("OCEAN", ["whale", "dolphin", "fish", "shell"]),
    theme("GARDEN", ["flower", "rose", "sunflower", "leaf"]),
    theme("FRUIT", ["apple", "banana", "grapes", "cherry"]),
    theme("ANIMALS", ["dog", "cat", "rabbit", "bear"]),
    theme("SPACE", ["rocket", "planet", "star", "moon"]),
    theme("SCIENCE", ["microscope", "atom", "dna", "telescope"]),
    theme("MAGIC", ["magic", "crystal", "ghost", "pumpkin"]),
    theme("CITY", ["city", "bridge", "camera", "night sky"]),
    theme("TOOLS", ["hammer", "wrench", "tools", "gear"]),
    theme("SCHOOL", ["book", "pencil", "school", "clock"]),
    theme("CELEBRATE", ["party", "balloon", "gift", "sparkles"]),
    theme("WEATHER", ["cloud", "rain", "snow", "lightning"]),
    theme("WILDLIFE", ["lion", "tiger", "elephant", "giraffe"]),
    theme("INSECTS", ["bee", "butterfly", "ladybug", "spider"]),
    theme("FARM", ["cow", "pig", "horse", "chicken"]),
    theme("RELAX", ["coffee", "tea", "sleep", "book"]),
];
