//! Record grammars shared by the structure and map parsers.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

macro_rules! bytes_regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<regex::bytes::Regex> =
            LazyLock::new(|| regex::bytes::Regex::new($regex).unwrap());
    };
}

// MODELLER remarks. Paths are relative to the PDB file carrying them.
regex!(ALIGNMENT_FILE_REGEX, r"^REMARK   6 ALIGNMENT: (\S+)");
regex!(TEMPLATE_PATH_REGEX, r"^REMARK   6 TEMPLATE PATH (\S+) (\S+)");
regex!(
    TEMPLATE_STATS_REGEX,
    r"^REMARK   6 TEMPLATE: (\S+) (\S+):(\S+) - (\S+):(\S+) MODELS (\S+):(\S+) - (\S+):\S+ AT (\S+)%"
);

// Deposition date in an official HEADER record, e.g. 14-SEP-10
regex!(DEPOSITION_DATE_REGEX, r"\d{2}-[A-Z]{3}-\d{2}");

// A PDB accession followed by a chain letter and an optional `_N` suffix
regex!(TEMPLATE_CODE_REGEX, r"^(\d[a-zA-Z0-9]{3})[a-zA-Z](_.*)?$");

// EMDB stamp written into MRC labels by the deposition system
bytes_regex!(EMDB_LABEL_REGEX, r"EMDATABANK\.org.*(EMD-\d+)");
