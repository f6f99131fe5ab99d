// ABOUTME: Course slide content for the deckgen application
// ABOUTME: Pure data: the ordered slide table for the Podman course deck

use crate::deck::Slide;

/// File name of the combined deck containing every slide.
pub const COMBINED_DECK_NAME: &str = "podman-course.odp";

/// The full course deck, in presentation order. Slides sharing a module
/// identifier are additionally emitted as one artifact per module.
pub fn course_slides() -> Vec<Slide> {
    vec![
        // Title slide
        Slide::title_slide(
            "intro",
            "Podman: Zero to Production",
            "Rootless Containers \u{b7} systemd \u{b7} Quadlet \u{b7} Security",
        )
        .notes(
            "Welcome everyone. This course takes you from never having typed 'podman' all the \
             way to running reboot-safe, secret-aware production services on a Fedora or RHEL \
             system. We use rootless Podman throughout \u{2014} that means you never need root to \
             run containers, which is both safer and more practical for most teams. By the end \
             you will be able to deploy a multi-service stack that survives reboots, handles \
             secrets securely, and can be upgraded or rolled back with a documented procedure. \
             Let's get started.",
        ),
        Slide::content(
            "intro",
            "Course Map",
            &[
                "Foundations  (Modules 00-03):  setup, concepts, commands, images",
                "Intermediate (Modules 04-07):  secrets, storage, networking, pods",
                "Production   (Modules 08-11):  building images, Quadlet, multi-service",
                "Operations   (Modules 12-14):  security, troubleshooting, auto-updates",
                "Capstone     (Module 80):      full stack with backups & upgrades",
                "Optional     (Module 90):      external secrets survey",
            ],
        )
        .notes(
            "Here is the shape of the course. We move from the bare minimum to get Podman \
             running all the way to a production-quality deployment workflow. Each module has \
             labs \u{2014} hands-on commands you run yourself. There is also a capstone project \
             that ties everything together into a reboot-safe stack with real secrets, backups, \
             and a documented upgrade procedure. Module 90 on external secrets is optional but \
             recommended if your team will eventually use Vault or SOPS. Total course time is \
             roughly 30-50 hours including all labs.",
        ),
        Slide::content(
            "intro",
            "What We Cover (and What We Don't)",
            &[
                "YES:  Single-host rootless Podman on Fedora / RHEL",
                "YES:  systemd integration via Quadlet (production baseline)",
                "YES:  Secrets, volumes, networking, security hardening",
                "YES:  Troubleshooting methodology + failure drills",
                "NO:   Kubernetes / OpenShift orchestration",
                "NO:   CI/CD pipelines (only image build patterns)",
                "NO:   Cloud-provider-specific tooling",
            ],
        )
        .notes(
            "Be explicit with students about scope. This is a single-host Podman course. If \
             someone asks how this maps to Kubernetes \u{2014} the concepts map well (images, \
             volumes, secrets, health checks) but the tooling is different. We deliberately skip \
             CI/CD pipelines; the course teaches you how to build and tag images correctly so \
             that any pipeline can pick them up. The Quadlet + systemd approach is the \
             Linux-native alternative to Docker Compose and is the right baseline for \
             RHEL-family systems.",
        ),
        // Module 00 — Setup
        Slide::section(
            "00-setup",
            "Module 00",
            "Setup \u{2014} Fedora / RHEL + systemd   (30-60 min)",
        )
        .notes(
            "Module 00 is pure setup. Its only job is to get everyone to a working rootless \
             Podman before the real learning begins. The three hard blockers are: cgroups v2 \
             not enabled, missing subuid/subgid ranges, and SELinux in enforcing mode causing \
             unexpected permission denials. Walk through each check as a group so no one falls \
             behind.",
        ),
        Slide::content(
            "00-setup",
            "Install and Verify",
            &[
                "sudo dnf install -y podman",
                "podman --version        (record it)",
                "podman info             (verify host config)",
                "podman info --format '{{.Host.CgroupsVersion}}'   must be: v2",
                "cgroups v2 is required for Quadlet \u{2014} check before anything else",
            ],
        )
        .notes(
            "On Fedora 40+ and RHEL 9+ cgroups v2 is the default. On older systems you may \
             need to add systemd.unified_cgroup_hierarchy=1 to the kernel command line and \
             reboot. Quadlet will not work without cgroups v2, so this check is mandatory. \
             Record the Podman version now \u{2014} it is the first thing to share when filing a \
             bug report or asking for help.",
        ),
        Slide::content(
            "00-setup",
            "Rootless Prerequisites",
            &[
                "grep \"^$USER:\" /etc/subuid /etc/subgid   (need 65536+ UIDs)",
                "If missing:  sudo usermod --add-subuids 100000-165535 $USER",
                "Log out and back in after adding subuid/subgid ranges",
                "SELinux check:  getenforce   (Enforcing is fine \u{2014} don't disable it)",
                "First container: podman run --rm docker.io/library/alpine:latest uname -a",
            ],
        )
        .notes(
            "Rootless containers rely on user namespaces. The kernel needs a range of \
             subordinate UIDs/GIDs mapped to your user so that processes inside the container \
             can have their own UID space. Without these ranges, Podman will fail with a \
             cryptic namespace error. The range 100000-165535 gives 65536 UIDs which is the \
             minimum Podman expects. SELinux: never tell students to set it to permissive. \
             Instead teach them the :Z bind-mount label which is covered in Module 05.",
        ),
        Slide::lab(
            "00-setup",
            "Lab 00: Workspace Setup",
            &[
                "mkdir -p ~/course_podman-labs && cd ~/course_podman-labs",
                "podman run --rm docker.io/library/alpine:latest uname -a",
                "Checkpoint: 'podman info' runs without errors",
                "Checkpoint: cgroups version reports v2",
                "Checkpoint: first container runs without sudo",
            ],
        )
        .notes(
            "Give students 10 minutes for this lab. The most common failure is a missing \
             network connection to docker.io \u{2014} if the pull hangs, check proxy settings or \
             try 'podman pull docker.io/library/alpine:latest' explicitly to see the error. \
             Second most common: missing subuid entries. Have the fix command ready on screen. \
             Once everyone has a working uname -a output from inside a container, the group is \
             ready for Module 01.",
        ),
        // Module 01 — Containers 101
        Slide::section(
            "01-containers-101",
            "Module 01",
            "Containers 101 \u{2014} Concepts   (30-45 min)",
        )
        .notes(
            "Module 01 is intentionally conceptual. Resist the urge to rush through it to get \
             to commands. The mental model built here \u{2014} image vs container, namespaces vs \
             cgroups, rootless vs rootful \u{2014} pays off every time a student debugs a weird \
             permission issue in module 05 or a network issue in module 06.",
        ),
        Slide::content(
            "01-containers-101",
            "Image vs Container vs Registry",
            &[
                "Image \u{2014} immutable template (layers + config)",
                "Container \u{2014} running (or stopped) instance of an image",
                "Registry \u{2014} where images live (Docker Hub, Quay, internal)",
                "Container has: a process, writable layer, mounts, network settings",
                "The kernel is shared \u{2014} a container is NOT a VM",
            ],
        )
        .notes(
            "The 'not a VM' point is crucial and comes up in security discussions later. A \
             container shares the host kernel. If the kernel has a privilege-escalation bug and \
             the container is running as root with extra capabilities, that is a real threat. \
             This is exactly why rootless plus non-root-inside-container matters. Common \
             analogy: an image is a class definition; a container is an instance. Deleting the \
             container does not delete the image, just like deleting an object does not delete \
             the class.",
        ),
        Slide::content(
            "01-containers-101",
            "Rootless vs Rootful",
            &[
                "Rootless: container daemon and processes run as your user account",
                "A breakout gains your user's privileges \u{2014} not host root",
                "Developers can run containers without handing them sudo",
                "Tradeoff: ports below 1024 need extra setup, UID mapping can confuse",
                "Rule: rootless by default; rootful only when you can explain why",
            ],
        )
        .notes(
            "This slide is the security foundation of the whole course. Every time a student \
             asks why they can not just use sudo, refer back here. The threat model: if an \
             attacker can escape the container (kernel CVE, misconfigured volume), rootless \
             limits blast radius to your user account rather than full host root. For the \
             low-port question: the recommended production pattern is a high port for the \
             container plus a reverse proxy (nginx, Caddy) in front. This is covered in Module \
             06. The sysctl approach is a last resort.",
        ),
        Slide::lab(
            "01-containers-101",
            "Lab 01: Compare Host vs Container",
            &[
                "uname -a                                        (host kernel)",
                "podman run --rm alpine:latest uname -a          (same kernel!)",
                "podman run --rm alpine:latest ps -ef             (tiny process tree)",
                "podman create --name c101 alpine:latest sleep 300",
                "podman inspect c101 | less   (note: image, mounts, network, user)",
                "podman rm c101",
            ],
        )
        .notes(
            "The key learning moment is the uname output being identical \u{2014} same kernel \
             version on host and container. This makes the 'not a VM' point visceral. The \
             inspect exercise teaches students where to look when debugging: the JSON blob from \
             podman inspect contains everything Podman knows about a container. Ask students: \
             what user is the container running as? They should find it in the Config.User \
             field. If it is empty string, that means root inside the container \u{2014} a \
             problem fixed in Module 08.",
        ),
        // Module 02 — Everyday commands
        Slide::section(
            "02-everyday-commands",
            "Module 02",
            "Everyday Podman Commands   (60-90 min)",
        )
        .notes(
            "Module 02 is muscle memory. Students will type these commands hundreds of times. \
             The goal is fluency: run, ps, logs, exec, stop, rm \u{2014} and knowing when to use \
             each. The writable-layer lab is the single most important concept in this module: \
             data written to the container filesystem is gone when the container is removed.",
        ),
        Slide::content(
            "02-everyday-commands",
            "Core Lifecycle Commands",
            &[
                "podman run --rm alpine echo hello             # run and auto-remove",
                "podman run -d --name web nginx:stable         # detached, named",
                "podman ps / podman ps -a                      # list running / all",
                "podman logs web                               # app stdout/stderr",
                "podman exec -it web sh                        # shell inside container",
                "podman stop web / podman rm -f web            # stop / force remove",
            ],
        )
        .notes(
            "Emphasise --rm for ephemeral containers. Every lab should use --rm unless you \
             specifically want to inspect the stopped state. Students who skip --rm end up \
             with dozens of stopped containers clogging podman ps -a. podman exec -it is the \
             single most-used debug tool. Ask: what do you do if the container has no shell? \
             Answer: use a sidecar on the same network (Module 07) or --network \
             container:<name> to share the namespace. Exit codes: podman inspect --format \
             {{.State.ExitCode}} is how you programmatically check why a container died.",
        ),
        Slide::lab(
            "02-everyday-commands",
            "Lab 02: The Writable Layer Is Not Persistence",
            &[
                "1.  podman run -it --name scratch alpine sh",
                "    Inside: echo hi > /tmp/hello.txt && exit",
                "2.  podman rm scratch",
                "3.  podman run -it --name scratch alpine sh",
                "    Inside: ls -la /tmp/hello.txt   ->  file is GONE",
                "Key insight: use volumes for anything you need to keep",
            ],
        )
        .notes(
            "This lab creates a memorable aha moment. Students who have used Docker with bind \
             mounts may already know this, but it is worth reinforcing. The correct mental \
             model: the writable layer is scratch space for the container. It is gone when the \
             container is gone. Follow up with the naming lab: run two containers with names a1 \
             and a2, then try to create a third container called a1 \u{2014} the error teaches \
             why stable naming matters for scripts and automation.",
        ),
        Slide::content(
            "02-everyday-commands",
            "Cleanup Commands",
            &[
                "podman container prune     # remove all stopped containers",
                "podman image prune         # remove dangling images",
                "podman system df           # see disk usage at a glance",
                "podman system prune        # remove ALL unused objects \u{2014} use with care",
                "Tip: know what prune will remove before running it",
            ],
        )
        .notes(
            "Production tip: add podman container prune to a weekly cron/timer to keep stopped \
             containers from accumulating. podman system prune can delete unnamed volumes \
             containing data you care about \u{2014} always check podman volume ls first. Common \
             interview question: how do you free up disk space from containers? Correct answer: \
             check df first, then prune images (largest savings), then containers, and never \
             blindly prune volumes.",
        ),
        // Module 11 — Quadlet + systemd
        Slide::section(
            "11-quadlet",
            "Module 11",
            "Production Baseline \u{2014} systemd + Quadlet   (2-3 hours)",
        )
        .notes(
            "Module 11 is the production turning point. Everything before was development \
             patterns; Quadlet is how services run in production on Linux. Quadlet converts \
             simple declarative unit files into full systemd service units. The benefit: \
             restart policies, boot ordering, journald logging, and boot persistence \u{2014} \
             all for free, using the same tooling that manages every other service on the \
             host.",
        ),
        Slide::content(
            "11-quadlet",
            "Why Quadlet?",
            &[
                "Linux-native: systemd manages restarts, logs, dependencies, boot start",
                "Quadlet file -> systemd generates the service unit automatically",
                "Files live at: ~/.config/containers/systemd/*.{container,network,volume,pod}",
                "Boot persistence: sudo loginctl enable-linger $USER",
                "journalctl --user -u myapp.service -n 100   (all logs in one place)",
            ],
        )
        .notes(
            "Key differentiator vs 'podman run in a script': systemd handles restart on \
             failure, ordered startup (dependencies), graceful shutdown, and log collection. A \
             cron-or-bash approach misses all of these. Linger: without loginctl enable-linger, \
             user services stop when you log out. On a server you want services to run \
             regardless of whether anyone is logged in. After enabling linger, user services \
             start on boot with no active login session. The Quadlet generator runs at \
             daemon-reload time. If Podman cannot parse your unit file, the generated service \
             will not appear.",
        ),
        Slide::content(
            "11-quadlet",
            "Quadlet Unit File Structure",
            &[
                "[Unit]      Description=My App",
                "[Container] Image=docker.io/library/nginx:stable",
                "[Container] PublishPort=127.0.0.1:8081:80",
                "[Container] Network=appnet.network  /  Volume=appdata.volume:/data",
                "[Service]   Restart=always",
                "[Install]   WantedBy=default.target",
            ],
        )
        .notes(
            "Walk through a real unit file from examples/quadlet/hello-nginx.container. \
             [Container] section translates directly to podman run flags: Image -> --image, \
             PublishPort -> -p, Network -> --network, Volume -> -v. The Network= and Volume= \
             values reference other Quadlet units by filename stem. systemd will start the \
             network and volume units before the container unit when you include them in \
             After= and Requires=. [Install] WantedBy=default.target means the service starts \
             on boot after linger is enabled. Without this line the service will not \
             autostart.",
        ),
        Slide::lab(
            "11-quadlet",
            "Lab 11: First Quadlet Service",
            &[
                "cp examples/quadlet/hello-nginx.container ~/.config/containers/systemd/",
                "systemctl --user daemon-reload",
                "systemctl --user start hello-nginx.service",
                "curl http://127.0.0.1:8081/   ->  nginx welcome page",
                "journalctl --user -u hello-nginx.service -n 20 --no-pager",
            ],
        )
        .notes(
            "Most common failure: forgetting daemon-reload after copying the file. Quadlet \
             files are only processed at daemon-reload time \u{2014} skip it and the service \
             will not exist. Have students check: systemctl --user status \
             hello-nginx.service. If it shows 'not found', daemon-reload was not run. If it \
             shows 'failed', check journalctl for the Podman error. After success, show the \
             clean-up: stop service, remove the .container file, daemon-reload again. This \
             teaches that Quadlet is not a database \u{2014} the file IS the configuration.",
        ),
        // Module 80 — Capstone
        Slide::section("80-capstone", "Module 80", "Capstone Project   (3-6 hours)").notes(
            "The capstone is the course's final exam in practical form. Students deploy a real \
             MariaDB + Adminer stack with full Quadlet management, secrets, backup/restore, \
             and digest-pinned upgrades. The success criteria are measurable and match real \
             production requirements.",
        ),
        Slide::content(
            "80-capstone",
            "Capstone: What You Will Build",
            &[
                "MariaDB (private, no published port) + Adminer (UI on port 8082)",
                "Private network (capnet) \u{2014} DB cannot reach internet (--internal)",
                "Named volumes for data and backups",
                "Podman secrets for the DB root password",
                "Quadlet units: reboot-safe, starts on boot via linger",
            ],
        )
        .notes(
            "This is not a toy: MariaDB with Quadlet plus secrets plus volumes is a realistic \
             pattern for running a production database on a single host. The Adminer web UI \
             gives a visual way to verify DB state. Architecture: capnet (--internal) -> only \
             cap-mariadb and cap-adminer attached -> DB cannot reach internet, admin UI \
             reaches DB via DNS name 'db' -> only Adminer publishes a port (8082) to the host \
             -> passwords live in Podman secrets referenced by name in .container units.",
        ),
        Slide::lab(
            "80-capstone",
            "Capstone Lab Steps",
            &[
                "1.  Create secret, install units, enable linger, daemon-reload, start",
                "2.  Verify: Adminer at :8082, DB has NO published ports",
                "3.  Insert test data (CREATE TABLE cap.t1, INSERT 1)",
                "4.  Backup -> DROP database -> Restore -> verify data is back",
                "5.  Upgrade by digest -> verify -> rollback to previous digest -> verify",
            ],
        )
        .notes(
            "Students who complete all five steps have demonstrated the complete production \
             skillset this course teaches. Step 2: podman port cap-mariadb should return \
             nothing. If it returns anything, the .container unit has a PublishPort= that must \
             be removed. Step 4: the restore test is the most important. Force the issue: tell \
             students to DROP DATABASE cap before restoring so they know the restore is \
             actually working, not just reading a cached result. Step 5: use real digests from \
             podman images --digests. Record them in a text file before upgrading so rollback \
             is a copy-paste operation.",
        ),
        // Closing
        Slide::section(
            "closing",
            "Course Complete",
            "You are now a production-ready Podman operator",
        )
        .notes(
            "Congratulations \u{2014} students have covered every skill needed to run rootless \
             Podman services in production. Remind them of the five habits that separate good \
             operators from beginners: 1. Rootless by default. 2. Secrets as files, never \
             environment variables. 3. Volumes for state, .containerignore for builds. 4. \
             Digest-pinned images for anything that matters. 5. Quadlet + systemd for anything \
             that must survive a reboot. Point them to the cheatsheets/ directory for quick \
             reference, and ASSESSMENTS.md for the two practical exams.",
        ),
        Slide::content(
            "closing",
            "Five Habits of a Podman Operator",
            &[
                "1.  Rootless by default \u{2014} explain every exception",
                "2.  Secrets as files \u{2014} never environment variables",
                "3.  Volumes for state \u{2014} writable layer is not persistence",
                "4.  Digest-pinned images \u{2014} reproducibility + audit trail",
                "5.  Quadlet + systemd \u{2014} reboot-safe production baseline",
            ],
        )
        .notes(
            "These five habits are a concise summary of the entire course. If a student can \
             defend every deviation from these five habits, they are ready for production. \
             Quick reference: cheatsheets/ directory contains CLI, rootless, Quadlet, \
             troubleshooting, and security cheatsheets. Next steps: read the capstone \
             assessment rubric (ASSESSMENTS.md Exam B), complete the capstone project, then \
             run the Module 90 survey if you need to scale beyond a single host.",
        ),
    ]
}
