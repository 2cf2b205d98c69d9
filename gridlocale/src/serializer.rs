//! Tree-to-file serialization.
//!
//! [`serialize_tree`] walks the tree depth first. Every leaf is written as
//! one file by the [`Serializer`] selected from the configuration; every
//! branch adds its name to the directory prefix of the leaves below it.
//! Directories are created once per traversal, immediately before the first
//! file written into them.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{
    config::Configuration,
    error::Error,
    formats::serializer_for,
    traits::{FileSystem, Serializer, StdFileSystem},
    tree::{Leaf, Tree, TreeNode},
};

/// Writes `tree` under the configured output directory using `std::fs`.
pub fn serialize_tree(config: &Configuration, tree: &Tree) -> Result<(), Error> {
    serialize_tree_with(config, tree, StdFileSystem)
}

/// Writes `tree` under the configured output directory through `fs`.
///
/// Stops at the first failure; files written before it are left in place.
pub fn serialize_tree_with<F: FileSystem>(
    config: &Configuration,
    tree: &Tree,
    fs: F,
) -> Result<(), Error> {
    let mut writer = TreeWriter {
        config,
        serializer: serializer_for(config.output_format()),
        fs,
        created_dirs: HashSet::new(),
        prefix: Vec::new(),
    };
    for (key, node) in tree {
        writer.visit(key, node)?;
    }
    Ok(())
}

struct TreeWriter<'a, F> {
    config: &'a Configuration,
    serializer: &'static dyn Serializer,
    fs: F,
    created_dirs: HashSet<PathBuf>,
    prefix: Vec<String>,
}

impl<F: FileSystem> TreeWriter<'_, F> {
    fn visit(&mut self, key: &str, node: &TreeNode) -> Result<(), Error> {
        match node {
            TreeNode::Leaf(leaf) => self.write_leaf(key, leaf),
            TreeNode::Branch(children) => {
                self.prefix.push(key.to_string());
                for (child_key, child) in children {
                    self.visit(child_key, child)?;
                }
                self.prefix.pop();
                Ok(())
            }
        }
    }

    fn write_leaf(&mut self, key: &str, leaf: &Leaf) -> Result<(), Error> {
        if leaf.is_empty() {
            tracing::debug!(key, "skipping empty leaf");
            return Ok(());
        }

        let dir = self.target_dir(key);
        if !self.created_dirs.contains(&dir) {
            tracing::debug!(dir = %dir.display(), "creating directory");
            self.fs.create_dir_all(&dir)?;
            self.created_dirs.insert(dir.clone());
        }

        let file = dir.join(self.serializer.file_name(key));
        tracing::info!(
            file = %file.display(),
            format = %self.config.output_format(),
            "writing localization file"
        );
        let content = self.serializer.serialize(leaf)?;
        self.fs.write(&file, &content)
    }

    fn target_dir(&self, key: &str) -> PathBuf {
        let root: &Path = self.config.output_dir();
        let relative = self.serializer.directory(key, &self.prefix);
        if relative.as_os_str().is_empty() {
            root.to_path_buf()
        } else {
            root.join(relative)
        }
    }
}
