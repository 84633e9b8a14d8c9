use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnBorrowRecordQuery, DependOnBorrowRuleQuery, DependOnReaderQuery,
};
use kernel::interface::update::{
    DependOnBorrowRecordModifier, DependOnBorrowRuleModifier, DependOnReaderModifier,
};
use kernel::prelude::entity::{BorrowRecord, BorrowRule, Reader, ReaderId, RecordId};
use kernel::KernelError;

use crate::config::rule_from_env;

pub use self::{borrow::*, reader::*, rule::*};

mod borrow;
mod reader;
mod rule;

const FIRST_RECORD_ID: i64 = 1;
const FIRST_READER_ID: i64 = 1000;

/// Every table of one ledger together with its id sequences.
#[derive(Debug)]
struct LedgerStore {
    records: BTreeMap<RecordId, BorrowRecord>,
    readers: BTreeMap<ReaderId, Reader>,
    next_record_id: i64,
    next_reader_id: i64,
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            readers: BTreeMap::new(),
            next_record_id: FIRST_RECORD_ID,
            next_reader_id: FIRST_READER_ID,
        }
    }
}

/// Previous state of one entry touched by an uncommitted transaction.
#[derive(Debug)]
enum Undo {
    Record(RecordId, Option<BorrowRecord>),
    Reader(ReaderId, Option<Reader>),
    NextRecordId(i64),
    NextReaderId(i64),
}

/// In-memory ledger guarded by a single lock.
///
/// A transaction owns the lock until it is committed or dropped, so a borrow's
/// count-then-insert can never interleave with another caller.
pub struct MemoryDatabase {
    ledger: Arc<Mutex<LedgerStore>>,
    borrow_records: MemoryBorrowRecordRepository,
    readers: MemoryReaderRepository,
    rules: MemoryBorrowRuleRepository,
}

impl MemoryDatabase {
    pub fn new(rule: BorrowRule) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(LedgerStore::default())),
            borrow_records: MemoryBorrowRecordRepository,
            readers: MemoryReaderRepository,
            rules: MemoryBorrowRuleRepository::new(rule),
        }
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Ok(Self::new(rule_from_env()?))
    }
}

/// Writes go straight to the locked store and are recorded in an undo log.
/// Dropping the transaction without committing replays the log backwards.
pub struct MemoryTransaction {
    guard: OwnedMutexGuard<LedgerStore>,
    undo: Vec<Undo>,
}

impl MemoryTransaction {
    fn store(&self) -> &LedgerStore {
        &self.guard
    }

    fn issue_record_id(&mut self) -> RecordId {
        let id = self.guard.next_record_id;
        self.undo.push(Undo::NextRecordId(id));
        self.guard.next_record_id += 1;
        RecordId::new(id)
    }

    fn issue_reader_id(&mut self) -> ReaderId {
        let id = self.guard.next_reader_id;
        self.undo.push(Undo::NextReaderId(id));
        self.guard.next_reader_id += 1;
        ReaderId::new(id)
    }

    fn put_record(&mut self, record: BorrowRecord) {
        let id = *record.id();
        let previous = self.guard.records.insert(id, record);
        self.undo.push(Undo::Record(id, previous));
    }

    fn put_reader(&mut self, reader: Reader) {
        let id = *reader.id();
        let previous = self.guard.readers.insert(id, reader);
        self.undo.push(Undo::Reader(id, previous));
    }

    fn revert(&mut self) {
        while let Some(undo) = self.undo.pop() {
            match undo {
                Undo::Record(id, Some(record)) => {
                    self.guard.records.insert(id, record);
                }
                Undo::Record(id, None) => {
                    self.guard.records.remove(&id);
                }
                Undo::Reader(id, Some(reader)) => {
                    self.guard.readers.insert(id, reader);
                }
                Undo::Reader(id, None) => {
                    self.guard.readers.remove(&id);
                }
                Undo::NextRecordId(id) => self.guard.next_record_id = id,
                Undo::NextReaderId(id) => self.guard.next_reader_id = id,
            }
        }
    }
}

impl Drop for MemoryTransaction {
    fn drop(&mut self) {
        if !self.undo.is_empty() {
            tracing::debug!(changes = self.undo.len(), "ledger transaction discarded");
            self.revert();
        }
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for MemoryDatabase {
    type Transaction = MemoryTransaction;
    async fn transact(&self) -> error_stack::Result<MemoryTransaction, KernelError> {
        let guard = Arc::clone(&self.ledger).lock_owned().await;
        Ok(MemoryTransaction {
            guard,
            undo: Vec::new(),
        })
    }
}

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(mut self) -> error_stack::Result<(), KernelError> {
        tracing::debug!(changes = self.undo.len(), "ledger transaction committed");
        self.undo.clear();
        Ok(())
    }

    async fn roll_back(mut self) -> error_stack::Result<(), KernelError> {
        tracing::debug!(changes = self.undo.len(), "ledger transaction rolled back");
        self.revert();
        Ok(())
    }
}

impl DependOnBorrowRecordQuery for MemoryDatabase {
    type BorrowRecordQuery = MemoryBorrowRecordRepository;
    fn borrow_record_query(&self) -> &Self::BorrowRecordQuery {
        &self.borrow_records
    }
}

impl DependOnBorrowRecordModifier for MemoryDatabase {
    type BorrowRecordModifier = MemoryBorrowRecordRepository;
    fn borrow_record_modifier(&self) -> &Self::BorrowRecordModifier {
        &self.borrow_records
    }
}

impl DependOnReaderQuery for MemoryDatabase {
    type ReaderQuery = MemoryReaderRepository;
    fn reader_query(&self) -> &Self::ReaderQuery {
        &self.readers
    }
}

impl DependOnReaderModifier for MemoryDatabase {
    type ReaderModifier = MemoryReaderRepository;
    fn reader_modifier(&self) -> &Self::ReaderModifier {
        &self.readers
    }
}

impl DependOnBorrowRuleQuery for MemoryDatabase {
    type BorrowRuleQuery = MemoryBorrowRuleRepository;
    fn borrow_rule_query(&self) -> &Self::BorrowRuleQuery {
        &self.rules
    }
}

impl DependOnBorrowRuleModifier for MemoryDatabase {
    type BorrowRuleModifier = MemoryBorrowRuleRepository;
    fn borrow_rule_modifier(&self) -> &Self::BorrowRuleModifier {
        &self.rules
    }
}
