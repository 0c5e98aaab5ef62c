//! Format-preserving access to `deployment.toml`.
//!
//! The file is held as a [`toml_edit::DocumentMut`] so that comments, key order and spacing
//! of everything outside the assigned fields survive a rewrite unchanged.

use crate::error::PatchError;
use crate::fields::FieldUpdateSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use toml_edit::{DocumentMut, Item, Table, TableLike, Value};

/// Top-level table holding one entry per chain.
pub const DEPLOYMENT_KEY: &str = "deployment";

/// A loaded deployment file and the path it is written back to
#[derive(Debug, Clone)]
pub struct DeploymentDocument {
    path: PathBuf,
    doc: DocumentMut,
}

impl DeploymentDocument {
    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        if !path.exists() {
            return Err(PatchError::FileNotFound {
                file: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| PatchError::io(path, e))?;
        Self::parse(path, &content)
    }

    /// Parse `content` as if it had been read from `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self, PatchError> {
        let doc = content
            .parse::<DocumentMut>()
            .map_err(|source| PatchError::Parse {
                file: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// Insert an empty `deployment` table if the document has none.
    ///
    /// Returns `true` when the table was created. Chain entries are never created.
    pub fn ensure_deployment_section(&mut self) -> bool {
        if self.doc.contains_key(DEPLOYMENT_KEY) {
            return false;
        }
        self.doc.insert(DEPLOYMENT_KEY, Item::Table(Table::new()));
        true
    }

    /// Chain keys under `deployment`, in document order.
    pub fn chain_keys(&self) -> Vec<String> {
        self.doc
            .get(DEPLOYMENT_KEY)
            .and_then(Item::as_table_like)
            .map(|deployment| deployment.iter().map(|(key, _)| key.to_string()).collect())
            .unwrap_or_default()
    }

    /// Current string value of `deployment.<chain_key>.<field>`, if present.
    pub fn field(&self, chain_key: &str, field: &str) -> Option<String> {
        self.doc
            .get(DEPLOYMENT_KEY)
            .and_then(Item::as_table_like)
            .and_then(|deployment| deployment.get(chain_key))
            .and_then(Item::as_table_like)
            .and_then(|chain| chain.get(field))
            .and_then(Item::as_str)
            .map(str::to_string)
    }

    /// Assign every update to `deployment.<chain_key>`.
    ///
    /// The chain entry is resolved before any assignment, so a lookup failure leaves the
    /// document untouched.
    pub fn apply_updates(
        &mut self,
        chain_key: &str,
        updates: &FieldUpdateSet,
    ) -> Result<(), PatchError> {
        let chain = self.chain_table_mut(chain_key)?;
        for update in updates {
            assign(chain, &update.field, &update.value);
        }
        Ok(())
    }

    fn chain_table_mut(&mut self, chain_key: &str) -> Result<&mut dyn TableLike, PatchError> {
        let path = &self.path;
        let not_a_table = |key: String| PatchError::NotATable {
            file: path.clone(),
            key,
        };

        let deployment = self
            .doc
            .get_mut(DEPLOYMENT_KEY)
            .and_then(Item::as_table_like_mut)
            .ok_or_else(|| not_a_table(DEPLOYMENT_KEY.to_string()))?;

        if !deployment.contains_key(chain_key) {
            return Err(PatchError::ChainNotFound {
                chain_key: chain_key.to_string(),
                file: path.clone(),
                available: deployment.iter().map(|(key, _)| key.to_string()).collect(),
            });
        }

        deployment
            .get_mut(chain_key)
            .and_then(Item::as_table_like_mut)
            .ok_or_else(|| not_a_table(format!("{}.{}", DEPLOYMENT_KEY, chain_key)))
    }

    /// Serialize the document, including all untouched formatting.
    pub fn render(&self) -> String {
        self.doc.to_string()
    }

    /// Write the document back to its path via a uniquely named sibling temp file and a
    /// rename.
    ///
    /// A symlinked path is resolved first so the link target is what gets replaced, and
    /// the existing file's permissions carry over to the new one. The temp file never
    /// outlives a failed save.
    pub fn save(&self) -> Result<(), PatchError> {
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| PatchError::io(dir, e))?;
        temp.write_all(self.render().as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| PatchError::io(temp.path(), e))?;

        if let Ok(metadata) = fs::metadata(&target) {
            fs::set_permissions(temp.path(), metadata.permissions())
                .map_err(|e| PatchError::io(temp.path(), e))?;
        }

        // On failure the temp file is deleted when the returned error drops.
        temp.persist(&target)
            .map(|_| ())
            .map_err(|e| PatchError::io(&target, e.error))
    }
}

/// Set `field` to a string value, keeping the old value's surrounding whitespace and
/// trailing comment when the key already exists.
fn assign(table: &mut dyn TableLike, field: &str, value: &str) {
    match table.get_mut(field) {
        Some(Item::Value(existing)) => {
            let decor = existing.decor().clone();
            *existing = Value::from(value);
            *existing.decor_mut() = decor;
        }
        _ => {
            table.insert(field, toml_edit::value(value));
        }
    }
}
