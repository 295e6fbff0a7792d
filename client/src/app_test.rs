use super::*;
use crate::auth::store::MemoryStore;
use crate::testing::ManualGateway;

fn assert_route_view<V: Fn() -> AnyView + Clone + Send + Sync + 'static>(_: &V) {}

#[test]
fn guarded_view_outlives_the_session_handle_it_was_built_from() {
    let view = {
        let session = SessionContext::new(Arc::new(MemoryStore::default()), Arc::new(ManualGateway::default()));
        guarded(&session, AppRoute::Dashboard, || ().into_any())
    };
    assert_route_view(&view);
}
