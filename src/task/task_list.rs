use super::model::Task;
use super::undo::{ActionKind, UndoableAction};
use crate::error::{JungError, Result};
use crate::storage::Storage;
use tracing::debug;

/// Ordered, index-addressed list of tasks with single-level undo
///
/// Indices are 0-based. Every successful mutation records an
/// [`UndoableAction`] (replacing the previous one) and is then written to the
/// attached [`Storage`]. The in-memory change happens first: if the save
/// fails the change stays and `JungError::StorageWrite` is returned.
pub struct TaskList {
    tasks: Vec<Task>,
    last_action: Option<UndoableAction>,
    storage: Option<Storage>,
}

impl TaskList {
    /// Create an empty list that is never persisted
    pub fn in_memory() -> Self {
        Self::new(Vec::new(), None)
    }

    /// Create a list from loaded tasks, saving to `storage` after each mutation
    pub fn with_storage(tasks: Vec<Task>, storage: Storage) -> Self {
        Self::new(tasks, Some(storage))
    }

    fn new(tasks: Vec<Task>, storage: Option<Storage>) -> Self {
        Self {
            tasks,
            last_action: None,
            storage,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// The action the next `undo` would reverse
    pub fn last_action(&self) -> Option<&UndoableAction> {
        self.last_action.as_ref()
    }

    /// Append a task to the end of the list
    ///
    /// # Returns
    /// A copy of the added task
    pub fn add(&mut self, task: Task) -> Result<Task> {
        self.tasks.push(task.clone());
        self.last_action = Some(UndoableAction::added(task.clone()));
        self.persist()?;
        Ok(task)
    }

    /// Remove the task at `index`, shifting later tasks down by one
    ///
    /// # Returns
    /// The removed task
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        let removed = self.tasks.remove(index);
        self.last_action = Some(UndoableAction::deleted(removed.clone(), index));
        self.persist()?;
        Ok(removed)
    }

    /// Mark the task at `index` as done
    pub fn mark(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.mark_done();
        let task = task.clone();
        self.last_action = Some(UndoableAction::marked(task.clone(), index));
        self.persist()?;
        Ok(task)
    }

    /// Mark the task at `index` as not done
    pub fn unmark(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.mark_not_done();
        let task = task.clone();
        self.last_action = Some(UndoableAction::unmarked(task.clone(), index));
        self.persist()?;
        Ok(task)
    }

    /// Case-insensitive substring search over descriptions
    ///
    /// # Returns
    /// Matching tasks in list order, each paired with its 0-based index
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        let keyword_lower = keyword.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description().to_lowercase().contains(&keyword_lower))
            .collect()
    }

    /// Reverse the most recent mutation
    ///
    /// - Add: the last task is removed
    /// - Delete: the task goes back to its original index, or to the end if
    ///   that index is now past the end
    /// - Mark / Unmark: the task at the recorded index is unmarked / marked
    ///
    /// The slot is cleared afterwards, so a second `undo` fails with
    /// `NothingToUndo`. No new undo action is recorded.
    ///
    /// # Returns
    /// The action that was reversed
    pub fn undo(&mut self) -> Result<UndoableAction> {
        let action = self.last_action.as_ref().ok_or(JungError::NothingToUndo)?;

        match (action.kind(), action.index()) {
            (ActionKind::Add, _) => {
                if self.tasks.pop().is_none() {
                    return Err(JungError::IndexOutOfRange { index: 0, len: 0 });
                }
            }
            (ActionKind::Delete, index) => {
                let index = index.unwrap_or(self.tasks.len()).min(self.tasks.len());
                self.tasks.insert(index, action.task().clone());
            }
            (ActionKind::Mark, Some(index)) => {
                self.check_index(index)?;
                self.tasks[index].mark_not_done();
            }
            (ActionKind::Unmark, Some(index)) => {
                self.check_index(index)?;
                self.tasks[index].mark_done();
            }
            (ActionKind::Mark | ActionKind::Unmark, None) => {
                return Err(JungError::IndexOutOfRange {
                    index: self.tasks.len(),
                    len: self.tasks.len(),
                });
            }
        }

        let action = self.last_action.take().ok_or(JungError::NothingToUndo)?;
        debug!("Undid {}", action.description());
        self.persist()?;
        Ok(action)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(JungError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        match &self.storage {
            Some(storage) => storage.save(&self.tasks),
            None => Ok(()),
        }
    }
}
