use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError,
};
use anyhow::{Context, anyhow, bail};
use std::collections::{BTreeMap, HashSet};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 7, tags = ["filesystem", "tree"])]
pub struct Solver;

const SMALL_DIR_LIMIT: u64 = 100_000;
const DISK_SIZE: u64 = 70_000_000;
const SPACE_NEEDED: u64 = 30_000_000;

/// Total size of every directory seen in the terminal log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySizes {
    root: u64,
    all: Vec<u64>,
}

/// Replays `cd`/`ls` output, keyed by path from the root
#[derive(Default)]
struct Replay {
    cwd: Vec<String>,
    sizes: BTreeMap<Vec<String>, u64>,
    files: HashSet<Vec<String>>,
}

impl Replay {
    fn step(&mut self, row: &str) -> anyhow::Result<()> {
        let mut words = row.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("$"), Some("cd"), Some("/")) => self.cwd.clear(),
            (Some("$"), Some("cd"), Some("..")) => {
                self.cwd.pop().context("`cd ..` above the root")?;
            }
            (Some("$"), Some("cd"), Some(name)) => {
                self.cwd.push(name.to_string());
                self.sizes.entry(self.cwd.clone()).or_default();
            }
            (Some("$"), Some("ls"), None) => {}
            (Some("dir"), Some(name), None) => {
                let mut path = self.cwd.clone();
                path.push(name.to_string());
                self.sizes.entry(path).or_default();
            }
            (Some(size), Some(name), None) => {
                let size = size
                    .parse::<u64>()
                    .with_context(|| format!("invalid file size {:?}", size))?;
                let mut path = self.cwd.clone();
                path.push(name.to_string());
                // A directory listed twice must not count its files twice
                if self.files.insert(path) {
                    for depth in 0..=self.cwd.len() {
                        *self.sizes.entry(self.cwd[..depth].to_vec()).or_default() += size;
                    }
                }
            }
            _ => bail!("unrecognised terminal line {:?}", row),
        }
        Ok(())
    }
}

impl AocParser for Solver {
    type Parsed = DirectorySizes;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        let mut replay = Replay::default();
        replay.sizes.insert(Vec::new(), 0);

        groups
            .iter()
            .flat_map(Group::rows)
            .enumerate()
            .try_for_each(|(idx, row)| {
                replay
                    .step(row.trim())
                    .map_err(|e| anyhow!("(line {}) {:#}", idx + 1, e))
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let root = replay.sizes.get(&Vec::<String>::new()).copied().unwrap_or(0);
        Ok(DirectorySizes {
            root,
            all: replay.sizes.into_values().collect(),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(dirs: &DirectorySizes) -> Result<String, SolveError> {
        let total: u64 = dirs.all.iter().filter(|&&size| size <= SMALL_DIR_LIMIT).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(dirs: &DirectorySizes) -> Result<String, SolveError> {
        let free = DISK_SIZE.saturating_sub(dirs.root);
        let to_free = SPACE_NEEDED.saturating_sub(free);

        dirs.all
            .iter()
            .copied()
            .filter(|&size| size >= to_free)
            .min()
            .map(|size| size.to_string())
            .ok_or_else(|| {
                let message =
                    format!("no directory frees {} bytes (root holds {})", to_free, dirs.root);
                SolveError::SolveFailed(message.into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver as _;

    const SAMPLE: &str = "$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    fn parse(text: &str) -> DirectorySizes {
        Solver::parse(&[Group::new(text)]).unwrap()
    }

    #[test]
    fn test_sample() {
        let dirs = parse(SAMPLE);
        assert_eq!(dirs.root, 48_381_165);
        assert_eq!(Solver::solve_part(&dirs, 1).unwrap(), "95437");
        assert_eq!(Solver::solve_part(&dirs, 2).unwrap(), "24933642");
    }

    #[test]
    fn test_repeated_listing_counted_once() {
        let dirs = parse("$ cd /\n$ ls\n10 a\n$ ls\n10 a\n");
        assert_eq!(dirs.root, 10);
    }

    #[test]
    fn test_empty_directory_is_counted() {
        let dirs = parse("$ cd /\n$ ls\ndir empty\n5 f\n");
        assert_eq!(dirs.all.len(), 2);
        assert!(dirs.all.contains(&0));
        // Enough free space already: the smallest directory qualifies
        assert_eq!(Solver::solve_part(&dirs, 2).unwrap(), "0");
    }

    #[test]
    fn test_cd_above_root() {
        let result = Solver::parse(&[Group::new("$ cd /\n$ cd ..\n")]);
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains("line 2")));
    }

    #[test]
    fn test_unknown_line() {
        assert!(Solver::parse(&[Group::new("$ rm -rf /\n")]).is_err());
    }
}
