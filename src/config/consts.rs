// src/config/consts.rs

// Report card layout
pub const ROW_WIDTH: usize = 19;        // label + 18 term/attendance slots
pub const SPRING_OFFSET: usize = 8;     // spring-only classes start at slot 9
pub const SPRING_MARKERS: [&str; 2] = ["Q3", "Q4"];
pub const REPORT_CARD_START: &str = "Course";
pub const REPORT_CARD_END: &str = "Comments:";
pub const LABEL_MIN_LEN: usize = 4;     // shorter cells are values, never class labels

// Markers the portal uses in place of data
pub const VIEW_CLASSES: &str = "View Classes";
pub const NOT_APPLICABLE: [&str; 3] = ["N/A", "NA", "&nbsp;"];

// Due dates arrive JSON-escaped (09\/07\/2023); attendance dates are human-formatted
pub const DATE_FORMATS: [&str; 7] = [
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%Y-%m-%d",
    "%a %b %d, %Y",
    "%A %B %d, %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "records";
