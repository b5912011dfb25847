//! Synthetic GraphQL documents for the parse benchmarks.

use std::fmt::Write;

/// A hand-written document exercising most of the grammar at once:
/// operations, variables, defaults, aliases, arguments, directives, inline
/// fragments, spreads, and a fragment definition.
pub const KITCHEN_SINK_QUERY: &str = r#"
query FetchProfile($id: ID!, $size: Int = 64, $tags: [String!] = ["a", "b"]) {
  user(id: $id) {
    id
    name
    smallPic: profilePic(size: $size)
    bigPic: profilePic(size: 1024) @cache: true
    ... on Admin {
      permissions
    }
    ...friendInfo
  }
}

mutation Follow($id: ID!) @traced {
  follow(id: $id, meta: {source: "bench", weight: 1.5e-3}) {
    id
  }
}

fragment friendInfo on User {
  friends(first: 10) {
    count
    edges {
      node {
        id
      }
    }
  }
}
"#;

/// Generates a query with `count` sibling fields at one nesting level.
pub fn flat_query(count: usize) -> String {
    let mut out = String::with_capacity(count * 10);
    out.push_str("query Flat {\n");
    for index in 0..count {
        writeln!(out, "  field{index}").unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates a query with selection sets nested `depth` levels deep.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 20);
    out.push_str("query Nested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}child {{").unwrap();
        writeln!(out, "{indent}  id").unwrap();
    }
    let inner_indent = "  ".repeat(depth + 1);
    writeln!(out, "{inner_indent}name").unwrap();
    for level in (0..depth).rev() {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}}}").unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates a query whose single field takes `count` literal-heavy
/// arguments.
pub fn argument_heavy_query(count: usize) -> String {
    let mut out = String::with_capacity(count * 40);
    out.push_str("query Args {\n  target(\n");
    for index in 0..count {
        writeln!(
            out,
            "    arg{index}: {{id: {index}, label: \"value {index}\", weights: [1, 2.5, 3e4]}}"
        )
        .unwrap();
    }
    out.push_str("  )\n}\n");
    out
}
