//! `qhu tasks` – list the task codes and their image subfolders.

use anyhow::Result;
use qhu_core::config::QhuConfig;
use qhu_core::tasks::TASK_FOLDERS;

pub fn run_tasks(cfg: &QhuConfig) -> Result<()> {
    let root = cfg.resolved_image_root()?;
    println!("Images root: {}", root.joined());
    println!("{:<8} {}", "CODE", "FOLDER");
    for task in TASK_FOLDERS {
        println!("{:<8} {}", task.code, task.folder);
    }
    Ok(())
}
