//! Labeled arrows leaving one entity block

use std::fmt;

use crate::core::ArrowStyle;

/// A directed, labeled arrow between two displayed entities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrow {
    pub from: String,
    pub to: String,
    pub label: String,
    pub style: ArrowStyle,
}

/// Arrows in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityArrow {
    arrows: Vec<Arrow>,
}

impl EntityArrow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_arrow(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
        style: ArrowStyle,
    ) {
        self.arrows.push(Arrow {
            from: from.into(),
            to: to.into(),
            label: label.into(),
            style,
        });
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    pub fn len(&self) -> usize {
        self.arrows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrows.is_empty()
    }

    /// One `<from> <style> <to> : <label>` line per arrow
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Arrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} : {}", self.from, self.style, self.to, self.label)
    }
}

impl fmt::Display for EntityArrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for arrow in &self.arrows {
            writeln!(f, "{}", arrow)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_serializes_to_nothing() {
        let arrows = EntityArrow::new();
        assert!(arrows.is_empty());
        assert_eq!(arrows.serialize(), "");
    }

    #[test]
    fn test_lines_in_insertion_order() {
        let mut arrows = EntityArrow::new();
        arrows.add_arrow("tag", "post", "posts", ArrowStyle::Composition);
        arrows.add_arrow("postTag", "tag", "tag.posts", ArrowStyle::Dependency);
        arrows.add_arrow("person", "user", "JTI", ArrowStyle::Inheritance);

        assert_eq!(arrows.len(), 3);
        assert_eq!(
            arrows.serialize(),
            "tag --* post : posts\npostTag ..> tag : tag.posts\nperson --|> user : JTI\n"
        );
        assert_eq!(arrows.arrows()[1].to_string(), "postTag ..> tag : tag.posts");
    }
}
