use std::{collections::HashMap, fmt, sync::Arc};

use futures_util::future::BoxFuture;

use crate::{
    errors::{SimulatorError, SimulatorResult},
    MethodArg, MethodDescriptor, SimulateResponse, SimulationDispatcher,
};

pub type SimulateFn = Box<
    dyn Fn(
            Vec<MethodArg>,
        ) -> BoxFuture<'static, SimulatorResult<SimulateResponse>>
        + Send
        + Sync,
>;

/// One simulate callable per program method, keyed by the method name as
/// declared in the IDL.
#[derive(Default)]
pub struct SimulateNamespace {
    methods: HashMap<String, SimulateFn>,
}

impl SimulateNamespace {
    pub fn new<'a>(
        dispatcher: Arc<SimulationDispatcher>,
        methods: impl IntoIterator<Item = &'a MethodDescriptor>,
    ) -> Self {
        let methods = methods
            .into_iter()
            .map(|method| {
                let name = method.name.clone();
                (name, simulate_fn(dispatcher.clone(), method.clone()))
            })
            .collect();
        Self { methods }
    }

    pub fn get(&self, name: &str) -> Option<&SimulateFn> {
        self.methods.get(name)
    }

    pub async fn call(
        &self,
        name: &str,
        args: Vec<MethodArg>,
    ) -> SimulatorResult<SimulateResponse> {
        let simulate = self
            .get(name)
            .ok_or_else(|| SimulatorError::UnknownMethod(name.to_string()))?;
        simulate(args).await
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl fmt::Debug for SimulateNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.names().collect::<Vec<_>>();
        names.sort_unstable();
        f.debug_struct("SimulateNamespace")
            .field("methods", &names)
            .finish()
    }
}

fn simulate_fn(
    dispatcher: Arc<SimulationDispatcher>,
    method: MethodDescriptor,
) -> SimulateFn {
    let method = Arc::new(method);
    Box::new(move |args| {
        let dispatcher = dispatcher.clone();
        let method = method.clone();
        Box::pin(async move { dispatcher.simulate(&method, args).await })
    })
}
