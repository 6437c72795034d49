use crate::error::Result;
use nk_util::file_tree::print_file_tree;
use std::path::Path;
use tracing::debug;

pub fn handle(path: &Path, filter: Option<&str>) -> Result<()> {
    debug!("tree of {} with filter {:?}", path.display(), filter);
    print_file_tree(path, filter)?;
    Ok(())
}
