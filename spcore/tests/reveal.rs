use spcore::{
    error::ObserverError,
    page::SharedPage,
    reveal::{
        next_reveal,
        IntersectionEntry,
        RevealState,
        Subscription,
        REVEAL_THRESHOLDS,
    },
};
use test_sp::viewport::MockViewport;

#[test]
fn initial_state() {
    let page = SharedPage::new();
    let state = page.snapshot();
    assert_eq!(state.reveal, RevealState::Hidden);
    assert!(!state.is_copied(0));
    assert!(!state.is_copied(1));
}

#[async_std::test]
async fn reveal_detaches_once() -> anyhow::Result<()> {
    let page = SharedPage::new();
    let viewport = MockViewport::new();
    let (mut subscription, mut events) = Subscription::attach(
        viewport.clone(),
        "video",
        REVEAL_THRESHOLDS,
    )?;
    assert_eq!(viewport.thresholds(), [0.3]);
    assert_eq!(viewport.target().as_deref(), Some("video"));

    assert!(viewport.intersect(IntersectionEntry::visible(0.1)));
    assert!(viewport.intersect(IntersectionEntry::visible(0.35)));
    assert!(viewport.intersect(IntersectionEntry::visible(0.9)));

    let entry = next_reveal(&mut events).await.expect("threshold crossed");
    assert!(page.with_mut(|state| state.intersected(&entry)));
    assert!(subscription.detach());
    assert!(page.snapshot().is_revealed());

    // a later crossing is neither delivered nor observable
    assert!(!viewport.intersect(IntersectionEntry::visible(1.0)));
    assert!(!page.with_mut(|state| state.intersected(&IntersectionEntry::visible(1.0))));
    assert!(page.snapshot().is_revealed());

    // teardown after the one-shot detach must not release again
    assert!(!subscription.detach());
    drop(subscription);
    assert_eq!(viewport.attach_count(), 1);
    assert_eq!(viewport.detach_count(), 1);
    Ok(())
}

#[async_std::test]
async fn teardown_before_reveal() -> anyhow::Result<()> {
    let page = SharedPage::new();
    let viewport = MockViewport::new();
    let (subscription, mut events) = Subscription::attach(
        viewport.clone(),
        "video",
        REVEAL_THRESHOLDS,
    )?;
    viewport.intersect(IntersectionEntry::visible(0.2));
    drop(subscription);
    assert!(!viewport.is_attached());
    assert_eq!(viewport.detach_count(), 1);

    // the stream ends without ever crossing the threshold
    assert_eq!(next_reveal(&mut events).await, None);
    assert!(!page.snapshot().is_revealed());
    Ok(())
}

#[test]
fn attach_twice_rejected() {
    let viewport = MockViewport::new();
    let first = Subscription::attach(viewport.clone(), "video", REVEAL_THRESHOLDS);
    assert!(first.is_ok());
    let second = Subscription::attach(viewport.clone(), "video", REVEAL_THRESHOLDS);
    assert!(second.is_err());
    assert_eq!(viewport.attach_count(), 1);
}

#[test]
fn attach_unavailable() {
    let viewport = MockViewport::unavailable();
    let result = Subscription::attach(viewport.clone(), "video", REVEAL_THRESHOLDS);
    assert_eq!(result.err(), Some(ObserverError::Unavailable));
    assert!(!viewport.is_attached());
    assert_eq!(viewport.attach_count(), 0);
    // nothing attached, so nothing is released
    assert_eq!(viewport.detach_count(), 0);
}
