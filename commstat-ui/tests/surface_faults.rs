use commstat_contracts::memory::{MemoryFilterForm, MemorySortIcon};
use commstat_contracts::{FilterFormSurface, SortIconSurface, SurfaceError};
use commstat_model::{CommunitySortField, FormState, SortDirection};
use commstat_ui::{IconProjection, SortControl, SortControlError};
use mockall::mock;

use CommunitySortField::{Followers, ViewsPerPost};

const BASE: &str = "filter__sorting-icon";

mock! {
    pub Form {}

    impl FilterFormSurface for Form {
        fn option_values(&self) -> Vec<String>;
        fn selected_value(&self) -> Option<String>;
        fn select_value(&mut self, value: &str) -> Result<(), SurfaceError>;
        fn inverse(&self) -> bool;
        fn set_inverse(&mut self, checked: bool) -> Result<(), SurfaceError>;
    }
}

mock! {
    pub Icon {}

    impl SortIconSurface for Icon {
        fn has_class(&self, class: &str) -> bool;
        fn set_class(&mut self, class: &str, enabled: bool) -> Result<(), SurfaceError>;
        fn classes(&self) -> Vec<String>;
    }
}

fn options() -> Vec<String> {
    ["followers", "views_per_post", "likes_per_view"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn accepting_icon() -> MockIcon {
    let mut icon = MockIcon::new();
    icon.expect_set_class().returning(|_, _| Ok(()));
    icon
}

#[test]
fn form_ignoring_writes_is_reported() {
    // Accepts every write but keeps reporting the server-rendered selection.
    let mut form = MockForm::new();
    form.expect_option_values().returning(options);
    form.expect_selected_value()
        .returning(|| Some("followers".to_string()));
    form.expect_inverse().return_const(true);
    // Once for the click, once to restore the previous sort.
    form.expect_select_value().times(2).returning(|_| Ok(()));
    form.expect_set_inverse().times(2).returning(|_| Ok(()));

    let mut control = SortControl::new(
        form,
        vec![(Followers, accepting_icon()), (ViewsPerPost, accepting_icon())],
        IconProjection::default(),
    )
    .unwrap();

    let err = control.activate_or_toggle(ViewsPerPost).unwrap_err();

    assert_eq!(
        err,
        SortControlError::FormOutOfSync {
            expected: "views_per_post (inverse=false)".to_string(),
            found: "followers (inverse=true)".to_string(),
        }
    );
}

#[test]
fn rejected_select_write_surfaces_as_error() {
    let mut form = MockForm::new();
    form.expect_option_values().returning(options);
    form.expect_selected_value()
        .returning(|| Some("followers".to_string()));
    form.expect_inverse().return_const(false);
    form.expect_select_value()
        .returning(|value| Err(SurfaceError::Dom(format!("cannot select {value}"))));
    form.expect_set_inverse().never();

    let mut control = SortControl::new(
        form,
        vec![(Followers, accepting_icon()), (ViewsPerPost, accepting_icon())],
        IconProjection::default(),
    )
    .unwrap();

    let err = control.activate_or_toggle(ViewsPerPost).unwrap_err();
    assert_eq!(
        err,
        SortControlError::Surface(SurfaceError::Dom(
            "cannot select views_per_post".to_string()
        ))
    );
}

#[test]
fn failing_icon_leaves_previous_sort_in_place() {
    let mut form = MockForm::new();
    form.expect_option_values().returning(options);
    form.expect_selected_value()
        .returning(|| Some("followers".to_string()));
    form.expect_inverse().return_const(false);
    form.expect_select_value()
        .withf(|value| value.to_string() == "followers")
        .returning(|_| Ok(()));
    form.expect_set_inverse()
        .withf(|checked| !*checked)
        .returning(|_| Ok(()));

    // The icon cannot show descending order.
    let mut followers = MockIcon::new();
    followers.expect_set_class().returning(|class, enabled| {
        if enabled && class.ends_with("--down") {
            Err(SurfaceError::Dom("class list is read-only".to_string()))
        } else {
            Ok(())
        }
    });

    let mut control = SortControl::new(
        form,
        vec![(Followers, followers), (ViewsPerPost, accepting_icon())],
        IconProjection::default(),
    )
    .unwrap();

    let err = control.activate_or_toggle(Followers).unwrap_err();
    assert!(matches!(
        err,
        SortControlError::Surface(SurfaceError::Dom(_))
    ));
    assert_eq!(control.active(), (Followers, SortDirection::Ascending));

    let state = control.sync_from_form().unwrap();
    assert_eq!(state, FormState::new(Followers, false));
}

/// Filter form whose checkbox refuses every write.
#[derive(Debug)]
struct StuckCheckbox(MemoryFilterForm);

impl FilterFormSurface for StuckCheckbox {
    fn option_values(&self) -> Vec<String> {
        self.0.option_values()
    }

    fn selected_value(&self) -> Option<String> {
        self.0.selected_value()
    }

    fn select_value(&mut self, value: &str) -> Result<(), SurfaceError> {
        self.0.select_value(value)
    }

    fn inverse(&self) -> bool {
        self.0.inverse()
    }

    fn set_inverse(&mut self, _checked: bool) -> Result<(), SurfaceError> {
        Err(SurfaceError::Dom("checkbox is disabled".to_string()))
    }
}

#[test]
fn half_written_form_is_rolled_back() {
    let form = MemoryFilterForm::new(options())
        .with_selection("followers", true)
        .unwrap();
    let icons = vec![
        (Followers, MemorySortIcon::with_classes([BASE])),
        (ViewsPerPost, MemorySortIcon::with_classes([BASE])),
    ];
    let mut control =
        SortControl::new(StuckCheckbox(form), icons, IconProjection::default())
            .unwrap();

    let err = control.activate_or_toggle(ViewsPerPost).unwrap_err();

    assert_eq!(
        err,
        SortControlError::Surface(SurfaceError::Dom(
            "checkbox is disabled".to_string()
        ))
    );
    assert_eq!(control.active(), (Followers, SortDirection::Descending));
    assert_eq!(control.form_state(), control.read_form().unwrap());
    assert_eq!(control.read_form().unwrap(), FormState::new(Followers, true));

    let projection = control.projection();
    let views = projection.read(control.icon(ViewsPerPost).unwrap());
    assert!(views.disabled);
    let followers = projection.read(control.icon(Followers).unwrap());
    assert!(followers.down && !followers.up && !followers.disabled);
}
