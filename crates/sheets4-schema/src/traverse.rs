//! Pre-order traversal over arbitrarily nested JSON values.
//!
//! The traversal visits every node reachable by descending into object
//! members and array elements, parent before children, and hands the visitor
//! the path to the node together with a mutable reference to the node itself.
//! Children are enumerated *after* the visitor runs on their parent, so a
//! visitor may rename keys or insert members on the node it is handed and the
//! traversal will descend into the node's current children.

use serde_json::Value;

/// One step of a path into a nested JSON value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object member key.
    Key(String),
    /// An array element index.
    Index(usize),
}

impl PathSegment {
    /// True if this segment is an object key equal to `name`.
    pub fn is_key(&self, name: &str) -> bool {
        matches!(self, PathSegment::Key(key) if key == name)
    }
}

/// Visit `root` and every nested node in pre-order.
///
/// The visitor receives the path from `root` to the node (empty at the root)
/// and the node itself. Scalars terminate recursion.
///
/// ```
/// use serde_json::json;
/// use sheets4_schema::traverse::traverse_mut;
///
/// let mut value = json!({ "name": "James", "tags": [1, 2] });
/// let mut visits = 0;
/// traverse_mut(&mut value, &mut |_path, _node| visits += 1);
/// // root, "name", "tags", 1, 2
/// assert_eq!(visits, 5);
/// ```
pub fn traverse_mut<F>(root: &mut Value, visitor: &mut F)
where
    F: FnMut(&[PathSegment], &mut Value),
{
    let mut path = Vec::new();
    walk(&mut path, root, visitor);
}

fn walk<F>(path: &mut Vec<PathSegment>, node: &mut Value, visitor: &mut F)
where
    F: FnMut(&[PathSegment], &mut Value),
{
    visitor(path, node);

    match node {
        Value::Object(object) => {
            // Snapshot the keys after the visitor has run so that renames and
            // insertions made by the visitor on this node are honored.
            let keys: Vec<String> = object.keys().cloned().collect();
            for key in keys {
                if let Some(child) = object.get_mut(&key) {
                    path.push(PathSegment::Key(key));
                    walk(path, child, visitor);
                    path.pop();
                }
            }
        }
        Value::Array(elements) => {
            for (index, child) in elements.iter_mut().enumerate() {
                path.push(PathSegment::Index(index));
                walk(path, child, visitor);
                path.pop();
            }
        }
        _ => {}
    }
}
