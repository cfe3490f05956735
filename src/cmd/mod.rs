pub mod digest;
pub mod export;
pub mod schema;
pub mod show;

pub use digest::DigestCommand;
pub use export::ExportCommand;
pub use schema::SchemaCommand;
pub use show::ShowCommand;
