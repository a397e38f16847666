use std::collections::HashMap;

/// One segment of a route pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// An ordered sequence of path segments, parsed from strings such as
/// `/album/:id/image/:image`. Segments starting with `:` are named
/// captures; a final `*` segment makes the pattern a catch-all for any
/// remaining path, including the empty one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<Segment>,
    wildcard: bool,
}

impl Pattern {
    /// Parse a pattern string.
    pub fn parse(pattern: &str) -> Result<Self, String> {
        let mut segments = Vec::new();
        let mut wildcard = false;

        for part in pattern.split('/').filter(|s| !s.is_empty()) {
            if wildcard {
                return Err(format!(
                    "Pattern '{}' has segments after the catch-all",
                    pattern
                ));
            }
            if part == "*" {
                wildcard = true;
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(format!("Pattern '{}' has an unnamed capture", pattern));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Pattern { segments, wildcard })
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Number of literal segments; the tiebreaker within a precedence class.
    pub fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    /// Explicit precedence: any exact pattern outranks any catch-all, and
    /// within a class more literal segments win. Higher keys win resolution.
    pub fn specificity(&self) -> (u8, usize) {
        (u8::from(!self.wildcard), self.literal_count())
    }

    /// Match a path against this pattern, extracting named captures.
    /// Returns None when the path does not match.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if self.wildcard {
            if parts.len() < self.segments.len() {
                return None;
            }
        } else if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts.iter().copied()) {
            match segment {
                Segment::Literal(literal) => {
                    if literal.as_str() != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }

    /// Whether some path could match both patterns. Used at table
    /// construction to reject tables the specificity rule cannot order.
    pub fn overlaps(&self, other: &Pattern) -> bool {
        if !self.wildcard && !other.wildcard && self.segments.len() != other.segments.len() {
            return false;
        }

        for (a, b) in self.segments.iter().zip(&other.segments) {
            if let (Segment::Literal(a), Segment::Literal(b)) = (a, b) {
                if a != b {
                    return false;
                }
            }
        }
        true
    }
}
