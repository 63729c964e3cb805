//! Sequential constant tables.
//!
//! Generates numbered constants from an op table such as
//!
//! ```text
//! var ops = [128]opDef{
//!     justop("crash"),
//!     valop("push"), valop("pop"),
//!     noop, noop,
//!     addrop("fetch"),
//! }
//! ```
//!
//! Each comma-separated slot takes the next code; slots without a quoted
//! name (`noop`) still take a code but produce no constant.

/// Default line prefix opening the table.
pub const DEFAULT_START_MARKER: &str = "var ops = ";

/// Settings for generating a constant table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstTable {
    /// Lines are skipped up to and including the first starting with this.
    pub start_marker: String,
    /// Prepended to each title-cased name.
    pub prefix: String,
    /// Conversion wrapped around each code, e.g. `opCode(0x02)`.
    pub type_name: String,
    /// Emits a `package` clause first when set.
    pub package: Option<String>,
}

impl Default for ConstTable {
    fn default() -> Self {
        Self {
            start_marker: DEFAULT_START_MARKER.to_string(),
            prefix: "opCode".to_string(),
            type_name: "opCode".to_string(),
            package: None,
        }
    }
}

impl ConstTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Generates the constant block for the table found in `lines`.
    ///
    /// The table ends at the first line starting with `}`. If the start
    /// marker never appears, an empty `const ()` block is produced.
    ///
    /// # Example
    /// ```
    /// use splice_blocks::consts::ConstTable;
    ///
    /// let source = ["var ops = [4]opDef{", "\tjustop(\"crash\"), noop,", "\tvalop(\"storeTo\"),", "}"];
    /// let out = ConstTable::new().generate(source);
    /// assert_eq!(out, [
    ///     "const (",
    ///     "opCodeCrash = opCode(0x00)",
    ///     "opCodeStoreto = opCode(0x02)",
    ///     ")",
    /// ]);
    /// ```
    pub fn generate<I>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut out = Vec::new();
        if let Some(package) = &self.package {
            out.push(format!("package {package}"));
            out.push(String::new());
        }

        let mut lines = lines.into_iter();
        for line in lines.by_ref() {
            if line.as_ref().starts_with(&self.start_marker) {
                break;
            }
        }

        out.push("const (".to_string());

        let mut code: u32 = 0;
        for line in lines {
            let line = line.as_ref();
            if line.starts_with('}') {
                break;
            }
            let line = line.trim();
            if line.starts_with("//") {
                continue;
            }

            for part in line.split(',').map(str::trim) {
                if part.is_empty() || part.starts_with("//") {
                    continue;
                }
                if let Some(name) = quoted_name(part).filter(|name| !name.is_empty()) {
                    out.push(format!(
                        "{}{} = {}(0x{:02x})",
                        self.prefix,
                        title_case(name),
                        self.type_name,
                        code
                    ));
                }
                code += 1;
            }
        }

        out.push(")".to_string());
        tracing::debug!(slots = code, "Generated constant table");
        out
    }
}

/// Text between the first pair of double quotes in `part`.
fn quoted_name(part: &str) -> Option<&str> {
    let (_, rest) = part.split_once('"')?;
    let (name, _) = rest.split_once('"')?;
    Some(name)
}

/// Uppercases letters that follow a non-letter, lowercases the rest.
///
/// ```
/// use splice_blocks::consts::title_case;
///
/// assert_eq!(title_case("storeTo"), "Storeto");
/// assert_eq!(title_case("p2c"), "P2C");
/// ```
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_name() {
        assert_eq!(quoted_name("valop(\"push\")"), Some("push"));
        assert_eq!(quoted_name("noop"), None);
        assert_eq!(quoted_name("bad(\"open"), None);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("divmod"), "Divmod");
        assert_eq!(title_case("c2p"), "C2P");
    }

    #[test]
    fn test_package_header() {
        let out = ConstTable::new().with_package("stackvm").generate(Vec::<String>::new());
        assert_eq!(out, ["package stackvm", "", "const (", ")"]);
    }

    #[test]
    fn test_comment_lines_and_fragments_are_skipped() {
        let source = [
            "var ops = [8]opDef{",
            "\t// 0x00",
            "\tjustop(\"crash\"), // trailing",
            "\tvalop(\"push\"),",
            "}",
            "\tvalop(\"after\"),",
        ];
        let out = ConstTable::new().generate(source);
        assert_eq!(
            out,
            [
                "const (",
                "opCodeCrash = opCode(0x00)",
                "opCodePush = opCode(0x01)",
                ")"
            ]
        );
    }
}
