// * Configuration Constants
// * Central location for all fixed thresholds, markers and defaults

// * Page fetch timeout in milliseconds
pub const PAGE_TIMEOUT_MS: u64 = 30_000;

// * Pause between sequential source fetches
pub const CRAWL_DELAY_MS: u64 = 1_000;

// * Responses shorter than this are treated as empty pages
pub const MIN_BODY_BYTES: usize = 500;

// * Probe request timeout in seconds (the formatter itself has none)
pub const PROBE_TIMEOUT_SECS: u64 = 60;

// * Default LLM endpoint and model
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/chat";
pub const OLLAMA_URL_ENV: &str = "OLLAMA_URL";
pub const DEFAULT_MODEL: &str = "llama3.1";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_NUM_CTX: u32 = 40_000;

// * Rough allowance for the system instructions when estimating prompt size
pub const PROMPT_OVERHEAD_CHARS: usize = 500;
pub const CHARS_PER_TOKEN: usize = 4;

// * Raw output preview length on parse failure
pub const RAW_PREVIEW_CHARS: usize = 500;

// * Narrative section markers
pub const NARRATIVE_START_MARKER: &str = "## Exploring the red city";
pub const NARRATIVE_END_MARKER: &str = "## Attractions";
pub const ATTRACTIONS_MARKER: &str = "## Attractions";

// * Sub-heading prefix for attraction entries
pub const ATTRACTION_HEADING: &str = "## ";

// * Minimum attraction name length (characters)
pub const MIN_ATTRACTION_CHARS: usize = 5;

// * Headings that end the attractions list
pub const STOP_TITLES: &[&str] = &["a trove of", "experiences", "itineraries", "destinations nearby"];

// * Summarizer thresholds
pub const SUMMARY_MIN_SENTENCE_CHARS: usize = 40;
pub const SUMMARY_MAX_SENTENCES: usize = 4;
pub const SUMMARY_MIN_SENTENCES: usize = 3;
pub const SUMMARY_KEYWORDS: &[&str] = &[
    "located", "founded", "known", "famous", "heritage", "fort", "festival", "October", "March",
];

// * Default destination literals
pub const DEFAULT_DESTINATION: &str = "Bikaner";
pub const DEFAULT_STATE: &str = "Rajasthan";
pub const DEFAULT_COUNTRY: &str = "India";

// * Default stage files
pub const RAW_FILE: &str = "bikaner_raw.json";
pub const CLEAN_FILE: &str = "bikaner_clean.json";
pub const FINAL_FILE: &str = "bikaner_final.json";
pub const TEMPLATE_FILE: &str = "schema_template.json";
