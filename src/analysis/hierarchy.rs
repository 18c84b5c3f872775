use crate::core::{
    utils::title_case,
    HierarchyNode,
};

const THEME_COUNT: usize = 3;
const CHILDREN_PER_THEME: usize = 4;

const PLACEHOLDER_THEMES: [&str; 4] =
    ["General Knowledge", "Basic Concepts", "Key Terminology", "Foundation"];

const PLACEHOLDER_CHILDREN: [&str; 4] = ["Concept A", "Concept B", "Concept C", "Concept D"];

/// Buckets ranked concepts into a small display tree: the first three become
/// theme titles, the rest are sliced into runs of four per theme. Sparse
/// input falls back to fixed placeholders so the panel never comes up empty.
pub fn organize_hierarchy(concepts: &[String]) -> Vec<HierarchyNode> {
    let concepts: Vec<String> = if concepts.is_empty() {
        PLACEHOLDER_THEMES.iter().map(|s| s.to_string()).collect()
    } else {
        concepts.to_vec()
    };

    let sub_items: Vec<String> = if concepts.len() > THEME_COUNT {
        concepts[THEME_COUNT..].to_vec()
    } else {
        PLACEHOLDER_CHILDREN.iter().map(|s| s.to_string()).collect()
    };

    concepts
        .iter()
        .take(THEME_COUNT)
        .enumerate()
        .map(|(idx, theme)| HierarchyNode {
            title: title_case(theme),
            children: sub_items
                .iter()
                .skip(idx * CHILDREN_PER_THEME)
                .take(CHILDREN_PER_THEME)
                .map(|child| title_case(child))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concepts(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_input_uses_placeholder_themes() {
        let nodes = organize_hierarchy(&[]);

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].title, "General Knowledge");
        assert_eq!(nodes[1].title, "Basic Concepts");
        assert_eq!(nodes[2].title, "Key Terminology");
        // The fourth placeholder theme is the remainder, so it becomes the
        // first theme's only sub-item.
        assert_eq!(nodes[0].children, vec!["Foundation"]);
        assert!(nodes[1].children.is_empty());
    }

    #[test]
    fn few_concepts_use_placeholder_children() {
        let nodes = organize_hierarchy(&concepts(&["osmosis", "mitosis"]));

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].title, "Osmosis");
        assert_eq!(
            nodes[0].children,
            vec!["Concept A", "Concept B", "Concept C", "Concept D"]
        );
    }

    #[test]
    fn remainder_is_chunked_four_per_theme_by_index() {
        let names: Vec<String> = (0..11).map(|i| format!("item{:02}", i)).collect();
        let nodes = organize_hierarchy(&names);

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].title, "Item00");
        assert_eq!(
            nodes[0].children,
            vec!["Item03", "Item04", "Item05", "Item06"]
        );
        assert_eq!(
            nodes[1].children,
            vec!["Item07", "Item08", "Item09", "Item10"]
        );
        assert!(nodes[2].children.is_empty());
    }

    #[test]
    fn titles_are_title_cased() {
        let nodes = organize_hierarchy(&concepts(&["photosynthesis", "energy", "light", "leaf"]));
        assert_eq!(nodes[0].title, "Photosynthesis");
        assert_eq!(nodes[0].children, vec!["Leaf"]);
    }
}
