// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use docanchor_engine::{Document, Node};

#[allow(dead_code)]
pub fn generate_contract(clauses: usize) -> Document {
    let mut content = Vec::with_capacity(clauses * 2);
    for clause in 0..clauses {
        content.push(Node::element(
            "heading",
            vec![Node::text(format!("§\u{00A0}{clause} Haf\u{00AD}tung"))],
        ));
        content.push(Node::paragraph(vec![
            Node::text("The Provider shall perform the Services with due care."),
            Node::Break,
            Node::text(format!(
                "Liability under clause {clause} is limited to the fees paid."
            )),
        ]));
    }
    Document::new(content)
}

#[allow(dead_code)]
pub fn generate_nested_lists(items: usize, depth: usize) -> Document {
    fn list(items: usize, depth: usize) -> Node {
        let children = (0..items)
            .map(|i| {
                let mut content = vec![Node::paragraph(vec![Node::text(format!(
                    "Item {i} at depth {depth}"
                ))])];
                if depth > 0 {
                    content.push(list(items, depth - 1));
                }
                Node::element("listItem", content)
            })
            .collect();
        Node::element("bulletList", children)
    }
    Document::new(vec![list(items, depth)])
}
