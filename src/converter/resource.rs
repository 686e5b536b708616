//! Resource info extraction
//!
//! Infers the asset category and directory of a rule from its URL shape.
//! Extractors are tried in order and the first match wins: the redirect
//! target before the source pattern, three-segment shapes before
//! two-segment ones. Anything unmatched falls back to [`ResourceType::Other`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Asset category inferred from a URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// `/summon/` assets
    Summon,
    /// `/leader/` (main character) assets
    Leader,
    /// `/npc/` (character) assets
    Npc,
    /// Anything else
    Other,
}

impl ResourceType {
    /// Path segment / log representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Summon => "summon",
            ResourceType::Leader => "leader",
            ResourceType::Npc => "npc",
            ResourceType::Other => "other",
        }
    }

    fn from_segment(segment: &str) -> Self {
        match segment {
            "summon" => ResourceType::Summon,
            "leader" => ResourceType::Leader,
            "npc" => ResourceType::Npc,
            _ => ResourceType::Other,
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resource classification of one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInfo {
    pub resource_type: ResourceType,
    pub dir_name: String,
    /// Empty when the URL shape has no sub-directory
    pub sub_dir: String,
}

impl ResourceInfo {
    fn new(resource_type: ResourceType, dir_name: &str, sub_dir: &str) -> Self {
        Self {
            resource_type,
            dir_name: dir_name.to_string(),
            sub_dir: sub_dir.to_string(),
        }
    }
}

/// Which side of the rule an extractor inspects
#[derive(Debug, Clone, Copy)]
enum Input {
    Target,
    Pattern,
}

static EXTRACTORS: Lazy<Vec<(Input, Regex)>> = Lazy::new(|| {
    [
        (Input::Target, r"/(summon|leader|npc)/([^/]+)/([^/]+)/"),
        (Input::Target, r"/(summon|leader|npc)/([^/]+)/"),
        (
            Input::Pattern,
            r"/(?:assets/img/sp/)?assets/(summon|leader|npc)/([^/]+)/([^/]+)/",
        ),
        (
            Input::Pattern,
            r"/(?:assets/img/sp/)?assets/(summon|leader|npc)/([^/]+)/",
        ),
    ]
    .into_iter()
    .map(|(input, re)| (input, Regex::new(re).expect("invalid resource regex")))
    .collect()
});

/// Classify a rule by its original source pattern and target URL
///
/// Never fails: unmatched URLs are classified as [`ResourceType::Other`]
/// with the parent directory (or file stem) of the target as `dir_name`.
pub fn extract_resource_info(pattern: &str, target: &str) -> ResourceInfo {
    for (input, re) in EXTRACTORS.iter() {
        let haystack = match input {
            Input::Target => target,
            Input::Pattern => pattern,
        };

        if let Some(caps) = re.captures(haystack) {
            let kind = caps.get(1).map_or("", |m| m.as_str());
            let dir = caps.get(2).map_or("", |m| m.as_str());
            let sub = caps.get(3).map_or("", |m| m.as_str());
            return ResourceInfo::new(ResourceType::from_segment(kind), dir, sub);
        }
    }

    fallback_info(target)
}

fn fallback_info(target: &str) -> ResourceInfo {
    let segments: Vec<&str> = target.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() >= 2 {
        return ResourceInfo::new(ResourceType::Other, segments[segments.len() - 2], "");
    }

    let last = target.rsplit('/').next().unwrap_or_default();
    let file = last.split('?').next().unwrap_or_default();
    ResourceInfo::new(ResourceType::Other, file_stem(file), "")
}

/// File name without its final extension
///
/// A leading dot (`.bashrc`) or trailing dot (`a.`) does not start an
/// extension, and `..` is kept as is.
fn file_stem(name: &str) -> &str {
    if name == "." {
        return "";
    }
    match name.rfind('.') {
        Some(i) if i > 0 && i + 1 < name.len() => &name[..i],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(t: ResourceType, dir: &str, sub: &str) -> ResourceInfo {
        ResourceInfo::new(t, dir, sub)
    }

    #[test]
    fn test_target_with_sub_dir() {
        let result = extract_resource_info(
            "zeta.png",
            "https://example.com/assets/summon/zeta/base/zeta.png",
        );
        assert_eq!(result, info(ResourceType::Summon, "zeta", "base"));
    }

    #[test]
    fn test_target_without_sub_dir() {
        let result = extract_resource_info("x", "https://example.com/npc/3040001000/a.png");
        assert_eq!(result, info(ResourceType::Npc, "3040001000", ""));
    }

    #[test]
    fn test_pattern_fallback() {
        let result = extract_resource_info(
            r"^https?://prd-game-a[0-9]?-gbf\.akamaized\.net/assets/img/sp/assets/leader/sd/1_0_01\.png",
            "https://raw.githubusercontent.com/u/r/main/1_0_01.png",
        );
        assert_eq!(result, info(ResourceType::Leader, "sd", ""));

        let result = extract_resource_info(
            "https://host/assets/npc/zoom/3040/x.png",
            "https://cdn/x.png",
        );
        assert_eq!(result, info(ResourceType::Npc, "zoom", "3040"));
    }

    #[test]
    fn test_target_takes_precedence_over_pattern() {
        let result = extract_resource_info(
            "https://host/assets/npc/zoom/3040/x.png",
            "https://cdn/summon/b/2040/x.png",
        );
        assert_eq!(result, info(ResourceType::Summon, "b", "2040"));
    }

    #[test]
    fn test_three_segment_before_two_segment() {
        let result = extract_resource_info("", "https://h/leader/a/b/c.png");
        assert_eq!(result, info(ResourceType::Leader, "a", "b"));
    }

    #[test]
    fn test_other_parent_dir() {
        let result = extract_resource_info("old.png", "https://example.com/x/old.png");
        assert_eq!(result, info(ResourceType::Other, "x", ""));
    }

    #[test]
    fn test_other_file_stem() {
        let result = extract_resource_info("a", "zeta.png?v=2");
        assert_eq!(result, info(ResourceType::Other, "zeta", ""));

        let result = extract_resource_info("a", "");
        assert_eq!(result, info(ResourceType::Other, "", ""));
    }

    #[test]
    fn test_file_stem_edges() {
        assert_eq!(file_stem("zeta.png"), "zeta");
        assert_eq!(file_stem("a.tar.gz"), "a.tar");
        assert_eq!(file_stem("a."), "a.");
        assert_eq!(file_stem(".."), "..");
        assert_eq!(file_stem(".bashrc"), ".bashrc");
        assert_eq!(file_stem("."), "");
        assert_eq!(file_stem(""), "");
    }

    #[test]
    fn test_other_file_stem_trailing_dot() {
        let result = extract_resource_info("a", "a.?v=1");
        assert_eq!(result, info(ResourceType::Other, "a.", ""));

        let result = extract_resource_info("a", "..");
        assert_eq!(result, info(ResourceType::Other, "..", ""));
    }

    #[test]
    fn test_resource_type_display() {
        assert_eq!(ResourceType::Summon.to_string(), "summon");
        assert_eq!(ResourceType::Npc.to_string(), "npc");
        assert_eq!(ResourceType::Other.to_string(), "other");
    }
}
