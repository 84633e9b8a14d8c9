use std::fmt::Display;

use crate::transfer::{BorrowRecordDto, ReaderDto};

/// Borrowing overview of one reader, rendered as plain text through [`Display`].
#[derive(Debug, Clone, PartialEq)]
pub struct BorrowReportDto {
    pub reader: ReaderDto,
    pub current: Vec<BorrowRecordDto>,
    pub history: Vec<BorrowRecordDto>,
}

impl BorrowReportDto {
    pub fn new(reader: ReaderDto, history: Vec<BorrowRecordDto>) -> Self {
        let current = history
            .iter()
            .filter(|record| !record.is_returned())
            .cloned()
            .collect();
        Self {
            reader,
            current,
            history,
        }
    }
}

impl Display for BorrowReportDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Borrow report")?;
        writeln!(f, "{}", self.reader)?;
        writeln!(f)?;
        writeln!(f, "Currently borrowed:")?;
        for record in &self.current {
            writeln!(
                f,
                "- Book ID: {} | Due: {}",
                record.book_id,
                record.due_at.date()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "History:")?;
        for record in &self.history {
            let status = if record.is_returned() {
                "returned"
            } else {
                "not returned"
            };
            write!(f, "- Book ID: {} | Status: {}", record.book_id, status)?;
            if record.fine > 0.0 {
                write!(f, " | Fine: {:.2}", record.fine)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use crate::transfer::{BorrowRecordDto, BorrowReportDto, ReaderDto};

    fn record(record_id: i64, book_id: i64, returned: bool, fine: f64) -> BorrowRecordDto {
        BorrowRecordDto {
            record_id,
            reader_id: 1000,
            book_id,
            borrowed_at: datetime!(2024-04-01 10:00 UTC),
            due_at: datetime!(2024-05-01 10:00 UTC),
            returned_at: returned.then_some(datetime!(2024-05-06 10:00 UTC)),
            fine,
        }
    }

    #[test]
    fn renders_current_and_history() {
        let reader = ReaderDto {
            id: 1000,
            name: "Wang Wu".to_string(),
            contact: "wangwu@lib.com".to_string(),
        };
        let report = BorrowReportDto::new(
            reader,
            vec![record(1, 5001, true, 2.5), record(2, 5002, false, 0.0)],
        );
        assert_eq!(report.current.len(), 1);

        let text = report.to_string();
        let expected = "\
Borrow report
Reader ID: 1000 | Name: Wang Wu | Contact: wangwu@lib.com

Currently borrowed:
- Book ID: 5002 | Due: 2024-05-01

History:
- Book ID: 5001 | Status: returned | Fine: 2.50
- Book ID: 5002 | Status: not returned
";
        assert_eq!(text, expected);
    }
}
