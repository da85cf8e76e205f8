use tablemap_core::{stmt::Value, Error, Result};

type Getter<R> = Box<dyn Fn(&R) -> Value + Send + Sync>;
type Setter<R> = Box<dyn Fn(&mut R, Value) -> Result<()> + Send + Sync>;

/// Reads and writes record fields by property name.
///
/// Built once per record type, alongside its descriptor, so binding values
/// never needs to look a field up by anything but its name.
pub struct Accessors<R> {
    entries: Vec<Accessor<R>>,
}

struct Accessor<R> {
    name: &'static str,
    get: Getter<R>,
    set: Setter<R>,
}

impl<R: 'static> Accessors<R> {
    pub fn new() -> Accessors<R> {
        Accessors { entries: vec![] }
    }

    /// Registers a field. A name that is already registered is ignored, so
    /// fields declared on the record shadow base fields of the same name.
    pub fn field(
        &mut self,
        name: &'static str,
        get: impl Fn(&R) -> Value + Send + Sync + 'static,
        set: impl Fn(&mut R, Value) -> Result<()> + Send + Sync + 'static,
    ) -> &mut Self {
        if !self.contains(name) {
            self.entries.push(Accessor {
                name,
                get: Box::new(get),
                set: Box::new(set),
            });
        }
        self
    }

    /// Projects the accessors of an embedded base record.
    pub fn base<B: 'static>(
        &mut self,
        base: &'static Accessors<B>,
        project: fn(&R) -> &B,
        project_mut: fn(&mut R) -> &mut B,
    ) -> &mut Self {
        for accessor in &base.entries {
            self.field(
                accessor.name,
                move |record| (accessor.get)(project(record)),
                move |record, value| (accessor.set)(project_mut(record), value),
            );
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Registered property names, own fields first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn get(&self, record: &R, name: &str) -> Result<Value> {
        Ok((self.entry(name)?.get)(record))
    }

    pub fn set(&self, record: &mut R, name: &str, value: Value) -> Result<()> {
        (self.entry(name)?.set)(record, value)
    }

    fn entry(&self, name: &str) -> Result<&Accessor<R>> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| Error::mapper(format!("no accessor for property '{name}'")))
    }
}

impl<R: 'static> Default for Accessors<R> {
    fn default() -> Accessors<R> {
        Accessors::new()
    }
}

impl<R> std::fmt::Debug for Accessors<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| entry.name))
            .finish()
    }
}
