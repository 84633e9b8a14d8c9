use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnReaderQuery, ReaderQuery};
use kernel::interface::update::{DependOnReaderModifier, ReaderModifier};
use kernel::prelude::entity::{Reader, ReaderContact, ReaderId, ReaderName};
use kernel::KernelError;

use crate::transfer::{CreateReaderDto, GetReaderDto, ReaderDto};

#[async_trait::async_trait]
pub trait CreateReaderService: 'static + Sync + Send + DependOnReaderModifier {
    async fn create_reader(&self, dto: CreateReaderDto) -> error_stack::Result<ReaderDto, KernelError> {
        let name = ReaderName::new(dto.name);
        if name.is_blank() {
            return Err(Report::new(KernelError::InvalidArgument)
                .attach_printable("Reader name must not be blank"));
        }

        let mut connection = self.database_connection().transact().await?;

        let id = self.reader_modifier().issue_id(&mut connection).await?;
        let reader = Reader::new(id, name, ReaderContact::new(dto.contact));
        self.reader_modifier()
            .create(&mut connection, &reader)
            .await?;
        connection.commit().await?;

        tracing::info!(reader_id = *id.as_ref(), "reader registered");
        Ok(ReaderDto::from(reader))
    }
}

impl<T> CreateReaderService for T where T: DependOnReaderModifier {}

#[async_trait::async_trait]
pub trait GetReaderService: 'static + Sync + Send + DependOnReaderQuery {
    async fn get_reader(
        &self,
        dto: GetReaderDto,
    ) -> error_stack::Result<Option<ReaderDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = ReaderId::new(dto.id);
        let reader = self.reader_query().find_by_id(&mut connection, &id).await?;

        Ok(reader.map(ReaderDto::from))
    }
}

impl<T> GetReaderService for T where T: DependOnReaderQuery {}
