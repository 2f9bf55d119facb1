use super::{Node, PositionUnit};

/// Lazy depth-first walk yielding every node with its absolute position.
///
/// Nodes come out in document order (parents before children). The walk keeps
/// its own explicit stack, so it never recurses and can be started again at
/// any time by calling [`super::Document::descendants`] or cloning.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<Frame<'a>>,
    unit: PositionUnit,
}

#[derive(Debug, Clone)]
struct Frame<'a> {
    nodes: std::slice::Iter<'a, Node>,
    /// Position of the next sibling to be yielded from `nodes`.
    pos: usize,
}

impl<'a> Descendants<'a> {
    /// Starts a walk over `content`, whose first node sits at position 0.
    pub fn new(content: &'a [Node], unit: PositionUnit) -> Self {
        Self {
            stack: vec![Frame {
                nodes: content.iter(),
                pos: 0,
            }],
            unit,
        }
    }

    /// Restricts the walk to leaves (text runs, breaks, atoms).
    pub fn leaves(self) -> impl Iterator<Item = (&'a Node, usize)> {
        self.filter(|(node, _)| node.is_leaf())
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (&'a Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(node) = frame.nodes.next() else {
                self.stack.pop();
                continue;
            };

            let pos = frame.pos;
            frame.pos += node.size(self.unit);

            if let Node::Element(el) = node {
                self.stack.push(Frame {
                    nodes: el.content.iter(),
                    pos: pos + 1,
                });
            }
            return Some((node, pos));
        }
    }
}
