use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Category facet node as returned by the catalog search API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryTreeNode {
    pub name: String,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub children: Vec<CategoryTreeNode>,
}

/// A category tree node with its position in the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlatCategory {
    pub quantity: u64,
    pub name: String,
    pub link: String,
    /// Accent-free names from the root down to this node, `/`-joined
    pub path: String,
    /// Depth in the tree, 0 for roots
    pub level: usize,
}

/// Decompose `name` and drop combining diacritical marks (U+0300..=U+036F).
pub fn strip_accents(name: &str) -> String {
    name.nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

/// Flatten a category tree in pre-order.
pub fn format_categories_tree(tree: &[CategoryTreeNode]) -> Vec<FlatCategory> {
    let mut categories = Vec::new();
    flatten_into(tree, "", 0, &mut categories);
    categories
}

fn flatten_into(
    nodes: &[CategoryTreeNode],
    parent_path: &str,
    level: usize,
    out: &mut Vec<FlatCategory>,
) {
    for node in nodes {
        let normalized = strip_accents(&node.name);
        let path = if parent_path.is_empty() {
            normalized
        } else {
            format!("{parent_path}/{normalized}")
        };

        out.push(FlatCategory {
            quantity: node.quantity,
            name: node.name.clone(),
            link: node.link.clone(),
            path: path.clone(),
            level,
        });
        flatten_into(&node.children, &path, level + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, children: Vec<CategoryTreeNode>) -> CategoryTreeNode {
        CategoryTreeNode {
            name: name.to_string(),
            quantity: 3,
            link: format!("/{}", name.to_lowercase()),
            children,
        }
    }

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("Café"), "Cafe");
        assert_eq!(strip_accents("Eletrônicos"), "Eletronicos");
        assert_eq!(strip_accents("Ação"), "Acao");
        assert_eq!(strip_accents("plain"), "plain");
    }

    #[test]
    fn test_accent_stripped_in_path_only() {
        let tree = vec![node("Café", vec![node("Latte", vec![])])];
        let flat = format_categories_tree(&tree);

        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].name, "Café");
        assert_eq!(flat[0].path, "Cafe");
        assert_eq!(flat[0].level, 0);
        assert_eq!(flat[1].name, "Latte");
        assert_eq!(flat[1].path, "Cafe/Latte");
        assert_eq!(flat[1].level, 1);
    }

    #[test]
    fn test_pre_order() {
        let tree = vec![
            node(
                "Electronics",
                vec![
                    node("Phones", vec![node("Android", vec![])]),
                    node("Laptops", vec![]),
                ],
            ),
            node("Books", vec![]),
        ];
        let flat = format_categories_tree(&tree);
        let paths: Vec<_> = flat.iter().map(|c| (c.path.as_str(), c.level)).collect();
        assert_eq!(
            paths,
            vec![
                ("Electronics", 0),
                ("Electronics/Phones", 1),
                ("Electronics/Phones/Android", 2),
                ("Electronics/Laptops", 1),
                ("Books", 0),
            ]
        );
    }

    #[test]
    fn test_empty_tree() {
        assert!(format_categories_tree(&[]).is_empty());
    }

    #[test]
    fn test_deserialize_without_children() {
        let tree: Vec<CategoryTreeNode> = serde_json::from_value(serde_json::json!([
            { "Name": "Moda", "Quantity": 12, "Link": "/moda/d" }
        ]))
        .unwrap();
        let flat = format_categories_tree(&tree);
        assert_eq!(flat[0].quantity, 12);
        assert_eq!(flat[0].link, "/moda/d");
        let json = serde_json::to_value(&flat[0]).unwrap();
        assert_eq!(json["Path"], "Moda");
        assert_eq!(json["Level"], 0);
    }
}
