use crate::error::Result;
use std::{collections::BTreeSet, fs, path::Path};

/// Ids the judge has accepted, one per line in `ac.txt`. Only used to
/// annotate the catalogue; never blocks a re-submission.
#[derive(Debug, Default)]
pub struct SolvedSet {
    ids: BTreeSet<u64>,
}

impl SolvedSet {
    pub fn load(path: &Path) -> Result<Self> {
        let mut ids = BTreeSet::new();
        if path.exists() {
            for line in fs::read_to_string(path)?.lines() {
                if let Ok(id) = line.trim().parse::<u64>() {
                    ids.insert(id);
                }
            }
        }
        Ok(SolvedSet { ids })
    }
    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }
    pub fn insert(&mut self, id: u64) -> bool {
        self.ids.insert(id)
    }
    pub fn save(&self, path: &Path) -> Result<()> {
        let lines: Vec<String> = self.ids.iter().map(u64::to_string).collect();
        fs::write(path, lines.join("\n"))?;
        Ok(())
    }
}

/// Load-insert-save convenience used after an acceptance.
pub fn mark(path: &Path, id: u64) -> Result<()> {
    let mut set = SolvedSet::load(path)?;
    set.insert(id);
    set.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_file(name: &str) -> std::path::PathBuf {
        let dir = env::temp_dir().join("lc-workspace-solved-tests");
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn missing_file_is_empty() {
        let set = SolvedSet::load(Path::new("/nonexistent/ac.txt")).unwrap();
        assert!(!set.contains(1));
    }

    #[test]
    fn round_trip() {
        let path = temp_file("round_trip.txt");
        let _ = fs::remove_file(&path);
        let mut set = SolvedSet::load(&path).unwrap();
        set.insert(17);
        set.insert(3);
        set.save(&path).unwrap();
        let reloaded = SolvedSet::load(&path).unwrap();
        assert!(reloaded.contains(17));
        assert!(reloaded.contains(3));
        assert!(!reloaded.contains(4));
    }

    #[test]
    fn mark_appends_to_existing_set() {
        let path = temp_file("mark.txt");
        fs::write(&path, "1\n2").unwrap();
        mark(&path, 9).unwrap();
        let set = SolvedSet::load(&path).unwrap();
        assert!(set.contains(1) && set.contains(2) && set.contains(9));
    }
}
