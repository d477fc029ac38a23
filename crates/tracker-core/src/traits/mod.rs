pub mod codec;
pub mod document;
pub mod environment;
pub mod navigator;
pub mod serializer;
pub mod storage;

pub use codec::ICodec;
pub use document::IDocument;
pub use environment::IBrowserEnvironment;
pub use navigator::INavigator;
pub use serializer::ISerializer;
pub use storage::IKeyValueStorage;
