mod repo;

pub use self::repo::Repository;
