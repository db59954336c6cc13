//! Static dictionaries. None of these may contain whitespace.

/// ISO 639-1 language codes, the full vocabulary of the `language` label.
pub const LANGUAGES_SHORT: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cv", "cy",
    "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj",
    "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht",
    "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv",
    "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky",
    "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn",
    "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny",
    "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru",
    "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss",
    "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts",
    "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi", "yo",
    "za", "zh", "zu",
];

/// Common nouns, the full vocabulary of the `word` label.
pub const NOUNS: &[&str] = &[
    "aardvark", "account", "airport", "alarm", "album", "anchor", "angle", "apple", "archive",
    "arrow", "artist", "badge", "bakery", "balloon", "banana", "band", "basket", "battery",
    "beach", "beacon", "bear", "bell", "bicycle", "bird", "blanket", "boat", "book", "bottle",
    "bracket", "branch", "bridge", "brush", "bucket", "buffer", "butter", "cabin", "cable",
    "camera", "candle", "canyon", "carpet", "castle", "cathedral", "cello", "chair", "channel",
    "cheese", "circle", "city", "cloud", "clock", "coast", "coffee", "comet", "compass",
    "copper", "cottage", "crane", "crystal", "cup", "desert", "diamond", "dolphin", "door",
    "dragon", "drum", "eagle", "engine", "falcon", "feather", "fern", "field", "flag", "flute",
    "forest", "fountain", "fox", "garden", "gate", "glacier", "globe", "goat", "guitar",
    "hammer", "harbor", "hawk", "helmet", "hill", "horizon", "horse", "island", "jacket",
    "jungle", "kettle", "key", "kite", "ladder", "lake", "lantern", "lemon", "library",
    "lighthouse", "lion", "machine", "magnet", "maple", "market", "meadow", "mirror", "monkey",
    "mountain", "needle", "nest", "ocean", "orchard", "otter", "owl", "paddle", "panther",
    "paper", "parrot", "pebble", "pencil", "piano", "pillow", "planet", "pocket", "pond",
    "puzzle", "quarry", "rabbit", "radio", "raven", "ribbon", "river", "rocket", "saddle",
    "sailboat", "satellite", "scarf", "shadow", "shelf", "signal", "silver", "socket", "spoon",
    "squirrel", "stone", "storm", "sunrise", "table", "teapot", "thunder", "tiger", "tower",
    "tractor", "trumpet", "tunnel", "turtle", "umbrella", "valley", "violin", "volcano",
    "wagon", "wallet", "waterfall", "whale", "window", "wolf", "zebra",
];

pub(crate) const ADJECTIVES: &[&str] = &[
    "amber", "ancient", "bold", "brave", "bright", "calm", "clever", "crimson", "curious",
    "daring", "eager", "electric", "fancy", "fierce", "gentle", "golden", "grand", "happy",
    "hidden", "humble", "icy", "jolly", "lively", "lucky", "mellow", "misty", "noble", "odd",
    "proud", "quick", "quiet", "rapid", "royal", "rustic", "shiny", "silent", "silver", "sly",
    "solid", "swift", "tiny", "vivid", "wild", "wise", "young", "zesty",
];

pub(crate) const VERBS: &[&str] = &[
    "bake", "build", "carry", "climb", "draw", "drive", "fetch", "fly", "gather", "glow",
    "hop", "jump", "launch", "lift", "mend", "paint", "push", "race", "roam", "run", "sail",
    "scan", "sing", "skate", "sort", "spin", "swim", "track", "trace", "wander", "watch",
];

pub(crate) const BS_VERBS: &[&str] = &[
    "aggregate", "architect", "benchmark", "brand", "cultivate", "deliver", "deploy",
    "disintermediate", "drive", "e-enable", "embrace", "empower", "enable", "engage",
    "engineer", "enhance", "envisioneer", "evolve", "expedite", "exploit", "extend",
    "facilitate", "generate", "grow", "harness", "implement", "incentivize", "incubate",
    "innovate", "integrate", "iterate", "leverage", "matrix", "maximize", "mesh", "monetize",
    "morph", "optimize", "orchestrate", "productize", "recontextualize", "redefine",
    "reintermediate", "reinvent", "repurpose", "revolutionize", "scale", "seize", "strategize",
    "streamline", "syndicate", "synergize", "synthesize", "target", "transform", "transition",
    "unleash", "utilize", "visualize", "whiteboard",
];

pub(crate) const BS_ADJECTIVES: &[&str] = &[
    "24/365", "24/7", "B2B", "B2C", "back-end", "best-of-breed", "bleeding-edge",
    "bricks-and-clicks", "clicks-and-mortar", "collaborative", "compelling", "cross-media",
    "cross-platform", "customized", "cutting-edge", "distributed", "dot-com", "dynamic",
    "e-business", "efficient", "end-to-end", "enterprise", "extensible", "frictionless",
    "front-end", "global", "granular", "holistic", "impactful", "innovative", "integrated",
    "interactive", "intuitive", "killer", "leading-edge", "magnetic", "mission-critical",
    "next-generation", "one-to-one", "open-source", "out-of-the-box", "plug-and-play",
    "proactive", "real-time", "revolutionary", "rich", "robust", "scalable", "seamless",
    "sexy", "sticky", "strategic", "synergistic", "transparent", "turn-key", "ubiquitous",
    "user-centric", "value-added", "vertical", "viral", "virtual", "visionary", "web-enabled",
    "wireless", "world-class",
];

pub(crate) const BS_NOUNS: &[&str] = &[
    "action-items", "applications", "architectures", "bandwidth", "channels", "communities",
    "content", "convergence", "deliverables", "e-business", "e-commerce", "e-markets",
    "e-services", "e-tailers", "experiences", "eyeballs", "functionalities", "infomediaries",
    "infrastructures", "initiatives", "interfaces", "markets", "methodologies", "metrics",
    "mindshare", "models", "networks", "niches", "paradigms", "partnerships", "platforms",
    "portals", "relationships", "ROI", "schemas", "solutions", "supply-chains", "synergies",
    "systems", "technologies", "users", "vortals", "web-readiness", "web-services",
];

pub(crate) const TLDS: &[&str] = &["com", "net", "org", "io", "biz", "info", "name", "us"];
