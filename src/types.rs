/// One confirmed open port on one host, synthesized as `"<host>:<port>/<proto>"`.
///
/// The text is ASCII by construction (addresses are captured from `[0-9:.]`,
/// port tokens from `[0-9/tcpud]`), so byte positions and glyph positions
/// coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPort {
    text: String,
}

impl OpenPort {
    pub fn new(host: &str, port: &str) -> Self {
        Self {
            text: format!("{host}:{port}"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte length of the record; also the number of animation glyphs.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Glyph at `idx`. Callers keep `idx < self.len()`.
    pub fn glyph(&self, idx: usize) -> char {
        self.text.as_bytes()[idx] as char
    }
}

/// Ordered collection of open-port records with a hard capacity cap.
///
/// Insertion order is discovery order in the report. Once `len() == max`,
/// further pushes are dropped; the parser keeps draining its input but the
/// set never grows past the cap.
#[derive(Debug)]
pub struct RecordSet {
    records: Vec<OpenPort>,
    max: usize,
}

impl RecordSet {
    pub fn with_capacity(max: usize) -> Self {
        Self {
            records: Vec::with_capacity(max),
            max,
        }
    }

    /// Append a record, unless the set is at capacity. Returns whether the
    /// record was kept.
    pub fn push(&mut self, record: OpenPort) -> bool {
        if self.is_full() {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.max
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, idx: usize) -> &OpenPort {
        &self.records[idx]
    }

    /// Record assigned to a terminal column: cyclic when columns outnumber
    /// records, so `assigned(i) == assigned(i + len())`.
    pub fn assigned(&self, column: usize) -> &OpenPort {
        &self.records[column % self.records.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpenPort> {
        self.records.iter()
    }
}
