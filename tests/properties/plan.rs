use std::path::PathBuf;

use plc_deploy::domain::entities::{
    ArtifactBundle, DeploymentStep, StepRole, VisuBundle, VisuItem,
};
use plc_deploy::domain::services::{build_plan, plan_len};
use plc_deploy::domain::value_objects::RemoteLayout;
use proptest::prelude::*;

fn app_pairs() -> impl Strategy<Value = Vec<PathBuf>> {
    prop::collection::vec("[a-z]{1,8}", 0..4).prop_map(|names| {
        names
            .into_iter()
            .flat_map(|n| {
                [
                    PathBuf::from(format!("build/{n}.app")),
                    PathBuf::from(format!("build/{n}.crc")),
                ]
            })
            .collect()
    })
}

fn visu() -> impl Strategy<Value = Option<VisuBundle>> {
    prop::option::of(prop::collection::vec(("[a-z]{1,8}", any::<bool>()), 1..6)).prop_map(
        |items| {
            items.map(|items| {
                let items = items
                    .into_iter()
                    .map(|(name, is_dir)| {
                        let path = format!("visu/{name}");
                        if is_dir {
                            VisuItem::directory(path)
                        } else {
                            VisuItem::file(path)
                        }
                    })
                    .collect();
                VisuBundle::new("visu", items).unwrap()
            })
        },
    )
}

fn bundle() -> impl Strategy<Value = ArtifactBundle> {
    (app_pairs(), visu()).prop_map(|(apps, visu)| {
        let bundle = ArtifactBundle::new("build/Archive.prj").with_app_crc_files(apps);
        match visu {
            Some(visu) => bundle.with_visu(visu),
            None => bundle,
        }
    })
}

fn root() -> impl Strategy<Value = String> {
    "/[a-z]{1,6}(/[a-z]{1,6}){0,2}"
}

proptest! {
    #[test]
    fn plan_is_deterministic(bundle in bundle(), root in root()) {
        let layout = RemoteLayout::new(root);
        prop_assert_eq!(build_plan(&bundle, &layout), build_plan(&bundle, &layout));
    }

    #[test]
    fn project_file_comes_first(bundle in bundle(), root in root()) {
        let layout = RemoteLayout::new(root);
        let plan = build_plan(&bundle, &layout);
        let first = &plan.steps()[0];
        prop_assert_eq!(first.role(), StepRole::Project);
        prop_assert_eq!(first.remote(), layout.boot_project());
    }

    #[test]
    fn app_files_keep_bundle_order(bundle in bundle()) {
        let plan = build_plan(&bundle, &RemoteLayout::default());
        let deployed: Vec<_> = plan
            .iter()
            .filter(|s| s.role() == StepRole::AppCrc)
            .filter_map(|s| s.local().map(|p| p.to_path_buf()))
            .collect();
        prop_assert_eq!(deployed.as_slice(), bundle.app_crc_files());
    }

    #[test]
    fn visu_steps_only_with_visu(bundle in bundle()) {
        let plan = build_plan(&bundle, &RemoteLayout::default());
        let visu_steps: Vec<&DeploymentStep> = plan.iter().filter(|s| s.is_visu()).collect();

        match bundle.visu() {
            None => prop_assert!(visu_steps.is_empty()),
            Some(visu) => {
                prop_assert_eq!(visu_steps.len(), visu.items().len() + 1);
                let is_ensure_dir = matches!(visu_steps[0], DeploymentStep::EnsureRemoteDir { .. });
                prop_assert!(is_ensure_dir);
                // Nothing but visu follows the directory creation
                let first_visu = plan.iter().position(|s| s.is_visu()).unwrap();
                prop_assert!(plan.steps()[first_visu..].iter().all(|s| s.is_visu()));
            }
        }
    }

    #[test]
    fn plan_len_matches_plan(bundle in bundle()) {
        prop_assert_eq!(plan_len(&bundle), build_plan(&bundle, &RemoteLayout::default()).len());
    }

    #[test]
    fn remote_paths_stay_under_root(bundle in bundle(), root in root()) {
        let layout = RemoteLayout::new(root.clone());
        let plan = build_plan(&bundle, &layout);
        let prefix = format!("{root}/");
        prop_assert!(plan.iter().all(|s| s.remote().starts_with(&prefix)));
    }
}
