mod database;
mod mongo;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::mongo::MongoConnection;
pub use self::myconfig::Config;
