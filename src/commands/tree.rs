//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which displays the in-scope
//! include graph of every top-level header in traversal order.
//!
//! A header that was already shown is printed once more, marked `(seen)`, at
//! every later point it is included, and its subtree is not repeated. Those
//! are exactly the points where `build` substitutes nothing.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::{Context, Result};
use clap::Args;
use ptree::{print_tree, TreeItem};

use amalgamate::amalgamator::{Amalgamator, VisitedSet};
use amalgamate::config::Config;
use amalgamate::extract::IncludeExtractor;
use amalgamate::filesystem::DiskTree;
use amalgamate::graph::{include_tree, IncludeEntry, IncludeNode};
use amalgamate::output::OutputConfig;
use amalgamate::path::to_slash;
use amalgamate::suggestions;

use crate::cli::SourceArgs;

/// Display the include graph of the source tree
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Maximum depth to display below each top-level header.
    ///
    /// Use 0 to show only the top-level headers.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,

    /// Also list out-of-scope includes
    #[arg(long)]
    pub external: bool,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs, source: &SourceArgs, output: &OutputConfig) -> Result<()> {
    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config = source.resolve(&working_dir)?;

    let roots = collect_roots(&config).map_err(|e| suggestions::explain(e, &config))?;
    let max_depth = args.depth.unwrap_or(usize::MAX);

    for root in &roots {
        let node = build_tree_node(root, max_depth, 0, args.external, output);
        print_tree(&node).context("Failed to display tree")?;
    }
    Ok(())
}

/// Walk the source tree the way `build` does, recording the graph instead of
/// text
fn collect_roots(config: &Config) -> amalgamate::error::Result<Vec<IncludeNode>> {
    let tree = DiskTree::new(&config.include_root);
    let amalgamator = Amalgamator::from_config(&tree, config)?;
    let extractor = IncludeExtractor::new(config.scope_prefix.clone())?;
    let mut visited = VisitedSet::new();
    let mut roots = Vec::new();

    for path in amalgamator.top_level_files(&config.source_dir)? {
        if visited.contains(&path) {
            continue;
        }
        roots.push(include_tree(&tree, &extractor, &path, &mut visited)?);
    }
    Ok(roots)
}

fn build_tree_node(
    node: &IncludeNode,
    max_depth: usize,
    current_depth: usize,
    external: bool,
    output: &OutputConfig,
) -> TreeNode {
    let mut label = to_slash(&node.path);
    if node.repeated {
        label = format!("{} {}", label, output.dim("(seen)"));
    }

    if current_depth >= max_depth {
        return TreeNode {
            label,
            children: vec![],
        };
    }

    let children: Vec<TreeNode> = node
        .includes
        .iter()
        .filter_map(|entry| match entry {
            IncludeEntry::Header(child) => Some(build_tree_node(
                child,
                max_depth,
                current_depth + 1,
                external,
                output,
            )),
            IncludeEntry::External(target) if external => Some(TreeNode {
                label: output.dim(&format!("{} (external)", target)),
                children: vec![],
            }),
            IncludeEntry::External(_) => None,
        })
        .collect();

    TreeNode { label, children }
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> std::borrow::Cow<'_, [Self::Child]> {
        std::borrow::Cow::Borrowed(&self.children)
    }
}
