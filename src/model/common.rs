pub trait Identified<T> {
    fn id(&self) -> T;
}

pub trait Named {
    fn name(&self) -> String;
}
